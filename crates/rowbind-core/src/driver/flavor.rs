/// Positional placeholder syntax of a SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// `?`
    Mysql,

    /// `$1`, `$2`, ...
    Postgresql,

    /// `?1`, `?2`, ...
    Sqlite,
}

impl Flavor {
    /// Writes the placeholder for the 1-based parameter `position`.
    pub fn write_placeholder(self, dst: &mut String, position: usize) {
        use std::fmt::Write;

        // Writing to a String cannot fail
        let _ = match self {
            Flavor::Mysql => write!(dst, "?"),
            Flavor::Postgresql => write!(dst, "${position}"),
            Flavor::Sqlite => write!(dst, "?{position}"),
        };
    }
}
