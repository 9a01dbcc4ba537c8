//! In-memory terminal rendering helpers.

use ratatui::{Frame, Terminal, backend::TestBackend, buffer::Buffer, style::Color};

/// Draw once into a `width` x `height` test terminal and return the buffer
pub fn draw_buffer<F>(width: u16, height: u16, draw: F) -> Buffer
where
    F: FnOnce(&mut Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test backend never fails");
    terminal.draw(draw).expect("test backend never fails");
    terminal.backend().buffer().clone()
}

/// Buffer rows as strings, trailing spaces removed
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Whole buffer as one newline-joined string
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer_lines(buffer).join("\n")
}

/// Position of the first cell where `needle` starts
pub fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let area = buffer.area;
    for y in area.y..area.y + area.height {
        // Border glyphs are multi-byte, so track the byte offset of each cell
        let mut line = String::new();
        let mut starts = Vec::with_capacity(usize::from(area.width));
        for x in area.x..area.x + area.width {
            starts.push((line.len(), x));
            line.push_str(buffer[(x, y)].symbol());
        }
        if let Some(byte_index) = line.find(needle)
            && let Some(&(_, x)) = starts.iter().find(|(start, _)| *start == byte_index)
        {
            return Some((x, y));
        }
    }
    None
}

/// Foreground colour of the cell at `(x, y)`
pub fn fg_at(buffer: &Buffer, x: u16, y: u16) -> Color {
    buffer[(x, y)].fg
}
