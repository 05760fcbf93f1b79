use crate::scanner::ScanState;

/// A SQL text together with a per-character classification telling which
/// characters are live code and which belong to string literals or comments.
/// One left-to-right pass, no backtracking. An unterminated quote or comment
/// leaves the rest of the input in the open state, so the tail is never
/// mistaken for code.
#[derive(Debug, Clone)]
pub struct LiveText {
    chars: Vec<char>,
    states: Vec<ScanState>,
}

impl LiveText {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut states = vec![ScanState::Code; chars.len()];
        let mut state = ScanState::Code;

        let mut position = 0;
        while position < chars.len() {
            let current = chars[position];
            let next = chars.get(position + 1).copied();

            match state {
                ScanState::Code => {
                    if current == '\'' {
                        state = ScanState::SingleQuote;
                        states[position] = state;
                    } else if current == '"' {
                        state = ScanState::DoubleQuote;
                        states[position] = state;
                    } else if current == '-' && next == Some('-') {
                        states[position] = ScanState::LineComment;
                        states[position + 1] = ScanState::LineComment;
                        state = ScanState::LineComment;
                        position += 2;
                        continue;
                    } else if current == '/' && next == Some('*') {
                        states[position] = ScanState::BlockComment;
                        states[position + 1] = ScanState::BlockComment;
                        state = ScanState::BlockComment;
                        position += 2;
                        continue;
                    }
                }
                ScanState::SingleQuote => {
                    states[position] = ScanState::SingleQuote;
                    if current == '\'' {
                        if next == Some('\'') {
                            // SQL-standard escaped quote stays inside the literal
                            states[position + 1] = ScanState::SingleQuote;
                            position += 2;
                            continue;
                        }
                        state = ScanState::Code;
                    }
                }
                ScanState::DoubleQuote => {
                    states[position] = ScanState::DoubleQuote;
                    if current == '"' {
                        if next == Some('"') {
                            states[position + 1] = ScanState::DoubleQuote;
                            position += 2;
                            continue;
                        }
                        state = ScanState::Code;
                    }
                }
                ScanState::LineComment => {
                    if current == '\n' {
                        state = ScanState::Code;
                    } else {
                        states[position] = ScanState::LineComment;
                    }
                }
                ScanState::BlockComment => {
                    states[position] = ScanState::BlockComment;
                    if current == '*' && next == Some('/') {
                        states[position + 1] = ScanState::BlockComment;
                        state = ScanState::Code;
                        position += 2;
                        continue;
                    }
                }
            }

            position += 1;
        }

        Self { chars, states }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// State at a character position; positions past the end read as code.
    pub fn state(&self, position: usize) -> ScanState {
        self.states.get(position).copied().unwrap_or(ScanState::Code)
    }

    pub fn is_live(&self, position: usize) -> bool {
        self.state(position).is_code()
    }

    /// The input with every non-code character replaced by a space, keeping
    /// all offsets stable.
    pub fn live_only(&self) -> String {
        self.chars
            .iter()
            .zip(self.states.iter())
            .map(|(ch, state)| if state.is_code() { *ch } else { ' ' })
            .collect()
    }

    /// Contiguous live-code runs as `(start_offset, text)` pairs. Text on the
    /// two sides of a literal or comment lands in separate spans and can never
    /// join into a false token.
    pub fn live_spans(&self) -> Vec<(usize, String)> {
        let mut spans = Vec::new();
        let mut start: Option<usize> = None;

        for position in 0..self.chars.len() {
            if self.states[position].is_code() {
                if start.is_none() {
                    start = Some(position);
                }
            } else if let Some(pivot) = start.take() {
                spans.push((pivot, self.chars[pivot..position].iter().collect()));
            }
        }

        if let Some(pivot) = start {
            spans.push((pivot, self.chars[pivot..].iter().collect()));
        }

        spans
    }

    pub fn into_parts(self) -> (Vec<char>, Vec<ScanState>) {
        (self.chars, self.states)
    }
}
