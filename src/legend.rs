//! Key legend shown in the status bar
//!
//! The actions reachable from the current screen are laid out two rows high,
//! each entry showing its primary key and a short label. When there are more
//! entries than fit, the legend is paged and the last slot of every page but
//! the last one shows `generic-other-cmd`, the key that flips to the next page.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthChar;

use crate::keymap::{Keymap, VirtualKey};

/// Columns reserved for the key name
pub const KEYLEN: usize = 3;

/// Columns reserved for the label
pub const LABELEN: usize = 8;

/// Rows in the legend
pub const ROWS: usize = 2;

/// Default maximum number of entries per row
pub const DEFAULT_COLUMNS: usize = 6;

/// Synthetic entries of the configuration menu, which has fixed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    General,
    Layout,
    Sidebar,
    Color,
    Notify,
    Keys,
}

impl MenuEntry {
    pub fn key(self) -> &'static str {
        match self {
            MenuEntry::General => "g",
            MenuEntry::Layout => "l",
            MenuEntry::Sidebar => "s",
            MenuEntry::Color => "c",
            MenuEntry::Notify => "n",
            MenuEntry::Keys => "k",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::General => "General",
            MenuEntry::Layout => "Layout",
            MenuEntry::Sidebar => "Sidebar",
            MenuEntry::Color => "Color",
            MenuEntry::Notify => "Notify",
            MenuEntry::Keys => "Keys",
        }
    }
}

/// One item in the legend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendEntry {
    Action(VirtualKey),
    Menu(MenuEntry),
}

impl From<VirtualKey> for LegendEntry {
    fn from(vkey: VirtualKey) -> Self {
        LegendEntry::Action(vkey)
    }
}

impl From<MenuEntry> for LegendEntry {
    fn from(entry: MenuEntry) -> Self {
        LegendEntry::Menu(entry)
    }
}

impl LegendEntry {
    /// Key name and label to display
    fn text(self, keymap: &Keymap) -> (String, &'static str) {
        match self {
            LegendEntry::Action(vkey) => (keymap.first_key(vkey), vkey.display_label()),
            LegendEntry::Menu(entry) => (entry.key().to_string(), entry.label()),
        }
    }
}

/// How a piece of legend text is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Highlighted key name
    Key,
    Label,
}

/// Where the legend is drawn
pub trait LegendSurface {
    /// Blank the legend area
    fn clear(&mut self) -> io::Result<()>;
    /// Draw `text` starting at `(row, col)` of the legend area
    fn write_text(&mut self, row: usize, col: usize, text: &str, style: Style) -> io::Result<()>;
}

/// A positioned piece of legend text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub text: String,
    pub style: Style,
}

/// Clip `text` to at most `width` display columns
///
/// Returns the clipped text and its display width.
pub fn clip(text: &str, width: usize) -> (String, usize) {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    (out, used)
}

/// Paged layout of a list of entries
#[derive(Debug, Clone)]
pub struct Legend<'a> {
    entries: &'a [LegendEntry],
    width: usize,
    columns: usize,
}

impl<'a> Legend<'a> {
    /// Lay out `entries` over `width` terminal columns, with at most
    /// `max_columns` entries per row
    pub fn new(entries: &'a [LegendEntry], width: usize, max_columns: usize) -> Self {
        let columns = (width / (KEYLEN + LABELEN + 1)).clamp(1, max_columns.max(1));
        Self {
            entries,
            width,
            columns,
        }
    }

    /// Entries per row
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Slots on one page
    pub fn page_size(&self) -> usize {
        self.columns * ROWS
    }

    /// Index of the first entry on `page`
    ///
    /// Every page but the last spends its final slot on `generic-other-cmd`.
    fn page_base(&self, page: usize) -> usize {
        page * (self.page_size() - 1)
    }

    /// Number of pages needed to show every entry
    pub fn page_count(&self) -> usize {
        let count = self.entries.len();
        let size = self.page_size();
        if count <= size {
            1
        } else {
            // (pages - 1) * (size - 1) + size >= count
            (count - size).div_ceil(size - 1) + 1
        }
    }

    /// Page shown after `page`, wrapping to the first
    pub fn next_page(&self, page: usize) -> usize {
        (page + 1) % self.page_count()
    }

    /// Entries shown on `page`, `generic-other-cmd` included
    pub fn page_entries(&self, page: usize) -> Vec<LegendEntry> {
        let page = page % self.page_count();
        let base = self.page_base(page);
        let count = self.entries.len();
        let shown = self.page_size().min(count.saturating_sub(base));

        (0..shown)
            .map(|i| {
                if i < shown - 1 || base + i == count - 1 {
                    self.entries[base + i]
                } else {
                    LegendEntry::Action(VirtualKey::OtherCmd)
                }
            })
            .collect()
    }

    /// Positioned text for `page`
    pub fn cells(&self, keymap: &Keymap, page: usize) -> Vec<Cell> {
        let entries = self.page_entries(page);
        if entries.is_empty() {
            return Vec::new();
        }

        let min_len = KEYLEN + LABELEN + 1;
        let padding = ((self.width * 2) / entries.len()).saturating_sub(min_len);
        let cell_len = min_len + padding;

        let mut cells = Vec::with_capacity(entries.len() * 2);
        for (i, entry) in entries.into_iter().enumerate() {
            let row = i % ROWS;
            let key_x = (i / ROWS) * cell_len;

            let (key, label) = entry.text(keymap);
            let (key, key_width) = clip(&key, KEYLEN);
            let (label, _) = clip(label, LABELEN);

            cells.push(Cell {
                row,
                col: key_x + KEYLEN - key_width,
                text: key,
                style: Style::Key,
            });
            cells.push(Cell {
                row,
                col: key_x + KEYLEN + 1,
                text: label,
                style: Style::Label,
            });
        }
        cells
    }

    /// Draw `page` on `surface`
    pub fn render<S: LegendSurface + ?Sized>(
        &self,
        keymap: &Keymap,
        page: usize,
        surface: &mut S,
    ) -> io::Result<()> {
        surface.clear()?;
        for cell in self.cells(keymap, page) {
            surface.write_text(cell.row, cell.col, &cell.text, cell.style)?;
        }
        Ok(())
    }
}

/// In-memory legend surface, one line of text per row
#[derive(Debug, Clone)]
pub struct TextGrid {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl TextGrid {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: vec![vec![' '; width]; ROWS],
        }
    }

    /// Rendered rows with trailing blanks removed
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .filter(|&&c| c != '\0')
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

impl LegendSurface for TextGrid {
    fn clear(&mut self) -> io::Result<()> {
        self.rows = vec![vec![' '; self.width]; ROWS];
        Ok(())
    }

    fn write_text(&mut self, row: usize, col: usize, text: &str, _style: Style) -> io::Result<()> {
        let Some(line) = self.rows.get_mut(row) else {
            return Ok(());
        };
        let mut x = col;
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if x + w > line.len() {
                break;
            }
            line[x] = c;
            // Wide characters cover a second cell
            for cell in line.iter_mut().skip(x + 1).take(w - 1) {
                *cell = '\0';
            }
            x += w;
        }
        Ok(())
    }
}

/// Legend drawn on the terminal through crossterm, starting at `top` row
pub struct TerminalSurface<W: Write> {
    out: W,
    top: u16,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, top: u16) -> Self {
        Self { out, top }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> LegendSurface for TerminalSurface<W> {
    fn clear(&mut self) -> io::Result<()> {
        for row in 0..ROWS as u16 {
            queue!(
                self.out,
                MoveTo(0, self.top + row),
                Clear(ClearType::CurrentLine)
            )?;
        }
        Ok(())
    }

    fn write_text(&mut self, row: usize, col: usize, text: &str, style: Style) -> io::Result<()> {
        queue!(self.out, MoveTo(col as u16, self.top + row as u16))?;
        match style {
            Style::Key => queue!(
                self.out,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset)
            ),
            Style::Label => queue!(self.out, Print(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(vkeys: &[VirtualKey]) -> Vec<LegendEntry> {
        vkeys.iter().copied().map(LegendEntry::from).collect()
    }

    #[test]
    fn test_columns_fit_width() {
        let entries = actions(&[VirtualKey::Quit]);
        assert_eq!(Legend::new(&entries, 80, 6).columns(), 6);
        assert_eq!(Legend::new(&entries, 40, 6).columns(), 3);
        assert_eq!(Legend::new(&entries, 5, 6).columns(), 1);
        assert_eq!(Legend::new(&entries, 200, 4).columns(), 4);
    }

    #[test]
    fn test_single_page() {
        let entries = actions(&[VirtualKey::Help, VirtualKey::Quit, VirtualKey::Save]);
        let legend = Legend::new(&entries, 80, 6);
        assert_eq!(legend.page_count(), 1);
        assert_eq!(legend.page_entries(0), entries);
    }

    #[test]
    fn test_other_cmd_on_non_final_pages() {
        let entries = actions(&VirtualKey::ALL[..20]);
        // 2 columns -> 4 slots per page, 3 real entries on all but the last
        let legend = Legend::new(&entries, 24, 2);
        assert_eq!(legend.page_size(), 4);
        assert_eq!(legend.page_count(), 7);

        let first = legend.page_entries(0);
        assert_eq!(first[..3], entries[..3]);
        assert_eq!(first[3], LegendEntry::Action(VirtualKey::OtherCmd));

        let last = legend.page_entries(6);
        assert_eq!(last, entries[18..].to_vec());
    }

    #[test]
    fn test_exactly_full_last_page_keeps_real_entry() {
        let entries = actions(&VirtualKey::ALL[..7]);
        let legend = Legend::new(&entries, 24, 2);
        assert_eq!(legend.page_count(), 2);
        assert_eq!(legend.page_entries(1), entries[3..].to_vec());
    }

    #[test]
    fn test_next_page_wraps() {
        let entries = actions(&VirtualKey::ALL[..20]);
        let legend = Legend::new(&entries, 24, 2);
        assert_eq!(legend.next_page(0), 1);
        assert_eq!(legend.next_page(6), 0);
    }

    #[test]
    fn test_cells_layout() {
        let keymap = Keymap::with_defaults().unwrap();
        let entries = actions(&[VirtualKey::Help, VirtualKey::Quit]);
        let legend = Legend::new(&entries, 24, 6);
        let cells = legend.cells(&keymap, 0);

        // padding = 24 * 2 / 2 - 12 = 12, both entries in the first column
        assert_eq!(
            cells,
            vec![
                Cell { row: 0, col: 2, text: "?".into(), style: Style::Key },
                Cell { row: 0, col: 4, text: "Help".into(), style: Style::Label },
                Cell { row: 1, col: 2, text: "q".into(), style: Style::Key },
                Cell { row: 1, col: 4, text: "Quit".into(), style: Style::Label },
            ]
        );
    }

    #[test]
    fn test_render_to_grid() {
        let keymap = Keymap::with_defaults().unwrap();
        let entries: Vec<LegendEntry> = vec![
            VirtualKey::ChangeView.into(),
            VirtualKey::Save.into(),
            MenuEntry::Keys.into(),
            VirtualKey::Quit.into(),
        ];
        let legend = Legend::new(&entries, 26, 6);
        let mut grid = TextGrid::new(26);
        legend.render(&keymap, 0, &mut grid).unwrap();

        // 4 entries over 26 columns: cell length 13
        assert_eq!(
            grid.lines(),
            vec!["TAB Chg Win    k Keys", "  s Save       q Quit"]
        );
    }

    #[test]
    fn test_undefined_action_shows_placeholder() {
        let mut keymap = Keymap::with_defaults().unwrap();
        let key = keymap.code_of("?");
        keymap.remove(key, VirtualKey::Help);
        let entries = actions(&[VirtualKey::Help]);
        let cells = Legend::new(&entries, 80, 6).cells(&keymap, 0);
        assert_eq!(cells[0].text, "XXX");
    }

    #[test]
    fn test_clip_by_display_width() {
        assert_eq!(clip("KEY_BTAB", 3), ("KEY".to_string(), 3));
        assert_eq!(clip("中文字", 3), ("中".to_string(), 2));
        assert_eq!(clip("q", 3), ("q".to_string(), 1));
    }

    #[test]
    fn test_empty_legend() {
        let keymap = Keymap::with_defaults().unwrap();
        let legend = Legend::new(&[], 80, 6);
        assert_eq!(legend.page_count(), 1);
        assert!(legend.cells(&keymap, 0).is_empty());
    }
}
