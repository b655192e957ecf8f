#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
    pub value: String,
}

/// A single submitted form value moving through validation and sanitization.
/// Each step consumes and returns the field so handlers read top to bottom in
/// the order the steps run.
#[derive(Debug)]
pub struct Field {
    name: &'static str,
    value: String,
    errors: Vec<FieldError>,
}

impl Field {
    pub fn new(name: &'static str, raw: &str) -> Self {
        Field {
            name,
            value: raw.to_string(),
            errors: Vec::new(),
        }
    }

    pub fn trim(mut self) -> Self {
        self.value = self.value.trim().to_string();
        self
    }

    /// Length is counted in characters, not bytes.
    pub fn min_length(mut self, min: usize, message: &'static str) -> Self {
        if self.value.chars().count() < min {
            self.errors.push(FieldError {
                field: self.name,
                message,
                value: self.value.clone(),
            });
        }
        self
    }

    pub fn escape(mut self) -> Self {
        self.value = escape_html(&self.value);
        self
    }

    pub fn finish(self) -> (String, Vec<FieldError>) {
        (self.value, self.errors)
    }
}

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
