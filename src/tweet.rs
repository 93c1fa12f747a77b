/// A loosely-typed record field. Tweet sources are not trusted to carry
/// a string in the text slot, so the slot keeps the source's shape and
/// the counter validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Text(String),
    Number(i64),
    Null,
}

/// One tweet record: `[id, author_id, text, date]`. Only the text field
/// is consulted by the counter; id, author and date are carried through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: u64,
    pub author_id: u64,
    pub text: Field,
    pub date: String,
}

impl Tweet {
    /// Builds a well-formed record with a string text field.
    pub fn new(id: u64, author_id: u64, text: &str, date: &str) -> Self {
        Tweet {
            id,
            author_id,
            text: Field::Text(text.to_string()),
            date: date.to_string(),
        }
    }

    /// The text content, if this record carries one.
    pub fn text(&self) -> Option<&str> {
        match &self.text {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }
}
