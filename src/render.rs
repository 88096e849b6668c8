use cellers::MazeLine;

use crate::{error::Error, settings::Format};

impl Format {
    /// Text printed once, before the first line.
    pub fn header(self, width: usize) -> Option<String> {
        match self {
            Format::Art => Some(top_border(width)),
            Format::Compact => Some("_".repeat(width * 2)),
            Format::Ron => None,
        }
    }

    /// Renders one maze line, possibly spanning multiple text lines, without trailing newline.
    pub fn render(self, line: &MazeLine) -> Result<String, Error> {
        Ok(match self {
            Format::Art => art(line),
            Format::Compact => compact(line),
            Format::Ron => ron_rows(line)?,
        })
    }
}

pub fn top_border(width: usize) -> String {
    "_".repeat(width * 4 + 1)
}

/// Each cell is three chars wide and two text lines high.
///
/// ```text
/// |       |   |
/// |___    |   |
/// ```
pub fn art(line: &MazeLine) -> String {
    let width = line.width();
    let mut out = String::with_capacity((width * 4 + 2) * 2);

    out.push('|');
    for right in line.right.iter() {
        out.push_str("   ");
        out.push(if right { '|' } else { ' ' });
    }

    out.push('\n');
    out.push('|');
    for (right, bottom) in line.right.iter().zip(line.bottom.iter()) {
        out.push_str(if bottom { "___" } else { "   " });
        out.push(if right { '|' } else { ' ' });
    }

    out
}

/// Each cell is a pair of chars, right wall and bottom wall.
pub fn compact(line: &MazeLine) -> String {
    line.right
        .iter()
        .zip(line.bottom.iter())
        .flat_map(|(right, bottom)| {
            [
                if right { '|' } else { ' ' },
                if bottom { '_' } else { ' ' },
            ]
        })
        .collect()
}

pub fn ron_rows(line: &MazeLine) -> Result<String, ron::Error> {
    Ok(format!(
        "{}\n{}",
        ron::to_string(&line.right)?,
        ron::to_string(&line.bottom)?
    ))
}

#[cfg(test)]
mod tests {
    use cellers::{Orientation, Row};

    use super::*;

    fn line(right: &[bool], bottom: &[bool]) -> MazeLine {
        MazeLine {
            right: Row::new(Orientation::Vertical, right.to_vec()),
            bottom: Row::new(Orientation::Horizontal, bottom.to_vec()),
        }
    }

    #[test]
    fn art_line() {
        let line = line(&[false, true, true], &[true, false, false]);
        assert_eq!(art(&line), "|       |   |\n|___    |   |");
        assert_eq!(top_border(3), "_____________");
    }

    #[test]
    fn compact_line() {
        let line = line(&[false, true, true], &[true, false, true]);
        assert_eq!(compact(&line), " _| |_");
    }

    #[test]
    fn ron_line() {
        let line = line(&[true], &[false]);
        let text = Format::Ron.render(&line).unwrap();
        let mut rows = text.lines();

        let right: Row = ron::from_str(rows.next().unwrap()).unwrap();
        let bottom: Row = ron::from_str(rows.next().unwrap()).unwrap();
        assert_eq!(right, line.right);
        assert_eq!(bottom, line.bottom);
        assert_eq!(Format::Ron.header(1), None);
    }
}
