use std::fmt;

/// A decoded marker argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// String literal, e.g. `"/users/{id}"`
    Str(String),
    /// Ordered list of values (array-typed arguments)
    List(Vec<Value>),
    /// Reference to a qualified constant, e.g. `RequestMethod.GET`
    Token(String),
    /// Nested marker instance
    Marker(MarkerInstance),
}

impl Value {
    /// Short description of the value's shape, used in shape errors
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Token(_) => "token",
            Value::Marker(_) => "marker",
        }
    }

    /// The literal text if this is a string literal
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Token(t) => write!(f, "{}", t),
            Value::Marker(m) => write!(f, "@{}", m.simple_name()),
            Value::List(items) => {
                write!(f, "{{")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// One marker (annotation) attached to a declaration or to a marker type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerInstance {
    /// Fully qualified marker type name
    pub qualified_name: String,
    /// Explicitly supplied arguments, in source order
    pub arguments: Vec<(String, Value)>,
}

impl MarkerInstance {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        MarkerInstance {
            qualified_name: qualified_name.into(),
            arguments: Vec::new(),
        }
    }

    /// Append an argument
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.push((name.into(), value));
        self
    }

    /// First argument with the given name
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|(arg, _)| arg == name)
            .map(|(_, value)| value)
    }

    /// Type name without its package qualifier (`GetMapping`)
    #[must_use]
    pub fn simple_name(&self) -> &str {
        simple_name(&self.qualified_name)
    }
}

/// Strip everything up to and including the last `.`
#[must_use]
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map(|(_, tail)| tail)
        .unwrap_or(qualified)
}
