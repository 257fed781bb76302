//! Scales text-art sprites to an arbitrary cell rectangle.
//!
//! Uses nearest-neighbour sampling in both axes so the sprite keeps its shape
//! whether it is shrunk to a few cells or stretched across the screen.

/// Scales a sprite to the target height
pub fn scale_sprite(lines: &[String], target_height: usize) -> Vec<String> {
    if lines.is_empty() {
        return vec![];
    }

    let source_height = lines.len();
    if target_height == source_height {
        return lines.to_vec();
    }

    let mut scaled = Vec::with_capacity(target_height);

    for i in 0..target_height {
        let source_index = (i * source_height) / target_height;
        scaled.push(lines[source_index.min(source_height - 1)].clone());
    }

    scaled
}

/// Scales one line to the target width. Lines shorter than `source_width`
/// are treated as padded with spaces.
pub fn scale_line(line: &str, source_width: usize, target_width: usize) -> Vec<char> {
    if source_width == 0 {
        return vec![' '; target_width];
    }
    let chars: Vec<char> = line.chars().collect();
    (0..target_width)
        .map(|i| {
            let source_index = (i * source_width) / target_width;
            chars.get(source_index).copied().unwrap_or(' ')
        })
        .collect()
}

/// Scales a sprite to exactly `width` x `height` cells.
pub fn scale_sprite_2d(lines: &[String], width: usize, height: usize) -> Vec<Vec<char>> {
    let source_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    scale_sprite(lines, height)
        .iter()
        .map(|line| scale_line(line, source_width, width))
        .collect()
}
