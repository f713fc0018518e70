use std::fmt;

pub const NAME_REQUIRED: &str = "Please input expense name";
pub const PRICE_REQUIRED: &str = "Please input expense price";
pub const PRICE_INVALID: &str = "Please input a valid expense price";

/// Coarse view of the draft form, derived from its fields and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Empty,
    PartiallyFilled,
    ReadyToCommit,
    /// A commit attempt failed and at least one field still carries an error.
    Invalid,
}

/// Per-field validation messages produced by a failed commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub name: Option<String>,
    pub price: Option<String>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.name.iter().chain(self.price.iter()).map(String::as_str)
    }
}

impl fmt::Display for DraftErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.messages().collect();
        write!(f, "{}", joined.join("; "))
    }
}

/// Text currently typed into the expense form, with its validation messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftInput {
    pub name: String,
    pub price: String,
    pub name_error: Option<String>,
    pub price_error: Option<String>,
}

impl DraftInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name text. Typing anything clears a pending name error.
    pub fn set_name(&mut self, text: impl Into<String>) {
        self.name = text.into();
        if !self.name.is_empty() {
            self.name_error = None;
        }
    }

    /// Replaces the price text. Typing anything clears a pending price error.
    pub fn set_price(&mut self, text: impl Into<String>) {
        self.price = text.into();
        if !self.price.is_empty() {
            self.price_error = None;
        }
    }

    pub fn errors(&self) -> DraftErrors {
        DraftErrors {
            name: self.name_error.clone(),
            price: self.price_error.clone(),
        }
    }

    pub fn state(&self) -> DraftState {
        if self.name_error.is_some() || self.price_error.is_some() {
            return DraftState::Invalid;
        }
        match (self.name.is_empty(), self.price.is_empty()) {
            (true, true) => DraftState::Empty,
            (false, false) => DraftState::ReadyToCommit,
            _ => DraftState::PartiallyFilled,
        }
    }

    /// Checks every field and records the resulting messages on the draft.
    ///
    /// Both fields are always checked so that a single attempt reports every
    /// problem at once. On success the parsed name and price are returned and
    /// the draft text is left untouched; callers clear it once the record is
    /// stored.
    pub fn validate(&mut self) -> Result<(String, f64), DraftErrors> {
        let mut errors = DraftErrors::default();

        if self.name.is_empty() {
            errors.name = Some(NAME_REQUIRED.to_string());
        }

        let price = if self.price.is_empty() {
            errors.price = Some(PRICE_REQUIRED.to_string());
            None
        } else {
            let parsed = parse_price(&self.price);
            if parsed.is_none() {
                errors.price = Some(PRICE_INVALID.to_string());
            }
            parsed
        };

        self.name_error = errors.name.clone();
        self.price_error = errors.price.clone();

        match price {
            Some(price) if errors.is_empty() => Ok((self.name.clone(), price)),
            _ => Err(errors),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Accepts finite, non-negative decimal text; surrounding whitespace is ignored.
fn parse_price(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}
