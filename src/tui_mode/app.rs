use rustgraph::{Expression, Plot, SampleGrid};
use std::time::{Duration, Instant};
use unicode_segmentation::UnicodeSegmentation;

pub struct HistoryEntry {
    pub formula: String,
    pub plot: Plot,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Info(String),
    Error(String),
}

pub struct App {
    pub input: String,
    /// Cursor position in grapheme clusters.
    pub cursor_position: usize,
    pub input_scroll: usize,
    pub history: Vec<HistoryEntry>,
    pub cursor_history: usize,
    pub grid: SampleGrid,
    pub precision: usize,
    pub message: Option<Message>,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub table_scroll: usize,
    pub table_height: usize,
    pub terminal_too_small: bool,
}

impl App {
    pub fn new(grid: SampleGrid, precision: usize) -> Self {
        App {
            input: String::new(),
            cursor_position: 0,
            input_scroll: 0,
            history: Vec::new(),
            cursor_history: 0,
            grid,
            precision,
            message: None,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            table_scroll: 0,
            table_height: 5,
            terminal_too_small: false,
        }
    }

    pub fn input_len(&self) -> usize {
        self.input.graphemes(true).count()
    }

    pub fn adjust_input_scroll(&mut self, visible_width: usize) {
        let total = self.input_len();
        let cursor_pos = self.cursor_position;

        if cursor_pos < self.input_scroll {
            self.input_scroll = cursor_pos;
        } else if cursor_pos >= self.input_scroll + visible_width {
            self.input_scroll = cursor_pos + 1 - visible_width.max(1);
        }

        if self.input_scroll > total.saturating_sub(visible_width) {
            self.input_scroll = total.saturating_sub(visible_width);
        }
    }

    /// The entry whose samples are on screen.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.history.get(self.cursor_history)
    }

    pub fn submit(&mut self) {
        let input = self.input.trim().to_string();
        if input.is_empty() {
            return;
        }

        if !self.run_command(&input) {
            self.plot_formula(&input);
        }
        self.clear_input();
    }

    /// Handles the non-formula commands. Returns false when `input` is not one.
    fn run_command(&mut self, input: &str) -> bool {
        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                self.should_quit = true;
                return true;
            }
            "clear" | "reset" => {
                self.history.clear();
                self.cursor_history = 0;
                self.table_scroll = 0;
                self.message = None;
                return true;
            }
            "help" => {
                self.show_help = true;
                self.help_scroll = 0;
                return true;
            }
            _ => {}
        }

        if let Some(rest) = input.strip_prefix("range ") {
            let bounds: Vec<Result<f64, _>> = rest.split_whitespace().map(str::parse).collect();
            self.message = Some(match bounds.as_slice() {
                [Ok(lo), Ok(hi)] => match SampleGrid::new(*lo, *hi, self.grid.width) {
                    Ok(grid) => {
                        self.grid = grid;
                        self.resample();
                        Message::Info(format!("x range set to [{}, {}]", lo, hi))
                    }
                    Err(e) => Message::Error(e.to_string()),
                },
                _ => Message::Error("usage: range MIN MAX".to_string()),
            });
            return true;
        }

        if let Some(rest) = input.strip_prefix("width ") {
            self.message = Some(match rest.trim().parse::<usize>() {
                Ok(width) => match SampleGrid::new(self.grid.x_min, self.grid.x_max, width) {
                    Ok(grid) => {
                        self.grid = grid;
                        self.resample();
                        Message::Info(format!("sampling {} points", grid.point_count()))
                    }
                    Err(e) => Message::Error(e.to_string()),
                },
                Err(_) => Message::Error("usage: width N".to_string()),
            });
            return true;
        }

        if let Some(formula) = input.strip_prefix("tree ") {
            self.message = Some(match Expression::parse(formula) {
                Ok(expr) => Message::Info(format!("{} reads as {}", formula.trim(), expr)),
                Err(e) => Message::Error(e.to_string()),
            });
            return true;
        }

        false
    }

    pub fn plot_formula(&mut self, formula: &str) {
        let start_time = Instant::now();
        let plot = Plot::from_formula(formula, &self.grid);
        let duration = start_time.elapsed();

        self.message = match plot.error() {
            Some(e) => {
                log::warn!("could not parse {:?}: {}", formula, e);
                Some(Message::Error(e.to_string()))
            }
            None => None,
        };

        self.history.push(HistoryEntry {
            formula: formula.to_string(),
            plot,
            duration,
        });
        self.cursor_history = self.history.len() - 1;
        self.table_scroll = 0;
    }

    /// Samples every history entry again, after the grid changed.
    pub fn resample(&mut self) {
        let grid = self.grid;
        for entry in &mut self.history {
            let start_time = Instant::now();
            entry.plot = Plot::from_formula(&entry.formula, &grid);
            entry.duration = start_time.elapsed();
        }
        self.table_scroll = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = Self::grapheme_index_to_byte_index(&self.input, self.cursor_position);
        self.input.insert(byte_idx, c);
        self.cursor_position = (self.cursor_position + 1).min(self.input_len());
    }

    pub fn delete_before_cursor(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.delete_at_cursor();
        }
    }

    pub fn delete_at_cursor(&mut self) {
        let start = Self::grapheme_index_to_byte_index(&self.input, self.cursor_position);
        let end = Self::grapheme_index_to_byte_index(&self.input, self.cursor_position + 1);
        self.input.drain(start..end);
    }

    pub fn move_cursor(&mut self, direction: i32) {
        match direction {
            -1 => self.cursor_position = self.cursor_position.saturating_sub(1),
            1 => self.cursor_position = (self.cursor_position + 1).min(self.input_len()),
            _ => {}
        }
    }

    pub fn move_cursor_by_words(&mut self, direction: i32) {
        let graphemes: Vec<&str> = self.input.graphemes(true).collect();
        let is_space = |g: &str| g.chars().all(char::is_whitespace);
        let mut pos = self.cursor_position.min(graphemes.len());

        if direction < 0 {
            while pos > 0 && is_space(graphemes[pos - 1]) {
                pos -= 1;
            }
            while pos > 0 && !is_space(graphemes[pos - 1]) {
                pos -= 1;
            }
        } else {
            while pos < graphemes.len() && !is_space(graphemes[pos]) {
                pos += 1;
            }
            while pos < graphemes.len() && is_space(graphemes[pos]) {
                pos += 1;
            }
        }

        self.cursor_position = pos;
    }

    pub fn navigate_history(&mut self, direction: i32) {
        if self.history.is_empty() {
            return;
        }
        if direction < 0 && self.cursor_history > 0 {
            self.cursor_history -= 1;
        } else if direction > 0 && self.cursor_history < self.history.len() - 1 {
            self.cursor_history += 1;
        }

        self.input = self.history[self.cursor_history].formula.clone();
        self.cursor_position = self.input_len();
        self.input_scroll = 0;
        self.table_scroll = 0;
    }

    pub fn scroll_table(&mut self, direction: i32) {
        let step = self.table_height.max(1);
        let rows = self.current().map_or(0, |entry| self.grid_rows(entry));
        let max_scroll = rows.saturating_sub(self.table_height);

        if direction < 0 {
            self.table_scroll = self.table_scroll.saturating_sub(step);
        } else {
            self.table_scroll = self.table_scroll.saturating_add(step).min(max_scroll);
        }
    }

    fn grid_rows(&self, entry: &HistoryEntry) -> usize {
        match &entry.plot {
            Plot::Curve(samples) => samples.len(),
            Plot::Blank { grid, .. } => grid.point_count(),
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.input_scroll = 0;
    }

    pub fn grapheme_index_to_byte_index(s: &str, index: usize) -> usize {
        s.grapheme_indices(true)
            .nth(index)
            .map(|(i, _)| i)
            .unwrap_or_else(|| s.len())
    }
}
