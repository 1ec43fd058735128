/// Parsed field tag.
///
/// Grammar: `column[,flag]*`. The column token may be empty. `-` in any position marks the
/// field transient and overrides every other token.
#[derive(Debug, Default, PartialEq)]
pub(super) struct Tag<'a> {
    pub(super) column: Option<&'a str>,
    pub(super) primary_key: bool,
    pub(super) auto_increment: bool,
    pub(super) transient: bool,
}

const TRANSIENT: &str = "-";

impl<'a> Tag<'a> {
    /// Parses a tag. On failure, returns the first unrecognized flag.
    pub(super) fn parse(src: &'a str) -> Result<Tag<'a>, &'a str> {
        let mut tokens = src.split(',').map(str::trim);
        let mut tag = Tag::default();

        match tokens.next() {
            Some(TRANSIENT) => tag.transient = true,
            Some("") | None => {}
            Some(column) => tag.column = Some(column),
        }

        let mut unknown = None;

        for token in tokens {
            match token {
                "" => {}
                TRANSIENT => tag.transient = true,
                "primarykey" | "pk" => tag.primary_key = true,
                "autoincrement" | "serial" | "generated" => tag.auto_increment = true,
                other => {
                    unknown.get_or_insert(other);
                }
            }
        }

        if tag.transient {
            return Ok(Tag {
                transient: true,
                ..Tag::default()
            });
        }

        match unknown {
            Some(token) => Err(token),
            None => Ok(tag),
        }
    }
}
