use std::fmt;

/// Result of executing a [`Command`](super::Command), printed one per line.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Ok,
    /// A stored value.
    Value(String),
    /// The key is absent.
    Nil,
    Bool(bool),
    Int(usize),
    /// Set contents. Rendered sorted so output does not depend on slot order.
    List(Vec<String>),
    Stats {
        len: usize,
        capacity: usize,
        tombstones: usize,
        load_factor: f64,
    },
}

impl fmt::Display for Reply {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Reply::Ok => write!(f, "OK"),
            Reply::Value(v) => write!(f, "\"{v}\""),
            Reply::Nil => write!(f, "(nil)"),
            Reply::Bool(b) => write!(f, "(boolean) {b}"),
            Reply::Int(n) => write!(f, "(integer) {n}"),
            Reply::List(items) if items.is_empty() => write!(f, "(empty set)"),
            Reply::List(items) => {
                let mut sorted: Vec<&String> = items.iter().collect();
                sorted.sort();
                for (i, item) in sorted.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}) \"{}\"", i + 1, item)?;
                }
                Ok(())
            }
            Reply::Stats {
                len,
                capacity,
                tombstones,
                load_factor,
            } => write!(
                f,
                "len={len} capacity={capacity} tombstones={tombstones} load_factor={load_factor:.3}"
            ),
        }
    }
}
