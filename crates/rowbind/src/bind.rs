use crate::{Error, Model, Result, Statement, TypeCache, TypeDescriptor, Value};

use rowbind_core::driver::Flavor;

use std::{any::TypeId, sync::Arc};

/// A source of values for `:name` placeholders.
///
/// Every [`Model`] is a parameter source; `()` means "no parameters".
pub trait Params: Sync {
    /// Descriptor of the source's type, or `None` when there is nothing to bind.
    fn descriptor(&self, cache: &TypeCache) -> Option<Result<Arc<TypeDescriptor>>>;

    /// Value of the field named `field`.
    fn value(&self, field: &str) -> Option<Value>;
}

impl<M: Model> Params for M {
    fn descriptor(&self, cache: &TypeCache) -> Option<Result<Arc<TypeDescriptor>>> {
        let id = TypeId::of::<M>();

        if let Some(descriptor) = cache.get(id) {
            return Some(Ok(descriptor));
        }

        let shape = M::shape();
        if !shape.is_record() {
            return Some(Err(Error::unsupported_type(shape.name)));
        }

        Some(cache.get_or_build(id, move || shape))
    }

    fn value(&self, field: &str) -> Option<Value> {
        self.get(field)
    }
}

impl Params for () {
    fn descriptor(&self, _cache: &TypeCache) -> Option<Result<Arc<TypeDescriptor>>> {
        None
    }

    fn value(&self, _field: &str) -> Option<Value> {
        None
    }
}

/// Rewrites `:name` placeholders into `flavor`'s positional syntax and collects the
/// arguments in placeholder order.
///
/// Repeated placeholders read the field again and append another argument. A query
/// without placeholders passes through unchanged.
pub(crate) fn bind<P: Params + ?Sized>(
    cache: &TypeCache,
    flavor: Flavor,
    query: &str,
    params: &P,
) -> Result<Statement> {
    let tokens = tokenize(query);

    let Some(descriptor) = params.descriptor(cache).transpose()? else {
        return match tokens.iter().find_map(Token::param) {
            Some(name) => Err(Error::missing_binding(name)),
            None => Ok(Statement::new(query)),
        };
    };

    let mut sql = String::with_capacity(query.len());
    let mut args = vec![];

    for token in &tokens {
        match *token {
            Token::Sql(text) => sql.push_str(text),
            Token::Param(name) => {
                let value = descriptor
                    .field(name)
                    .and_then(|field| params.value(&field.name))
                    .ok_or_else(|| Error::unknown_parameter(descriptor.name(), name))?;

                args.push(value);
                flavor.write_placeholder(&mut sql, args.len());
            }
        }
    }

    tracing::trace!(sql = %sql, params = args.len(), "bound statement");

    Ok(Statement::with_params(sql, args))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    /// SQL text, copied verbatim
    Sql(&'a str),

    /// Placeholder name, without the leading `:`
    Param(&'a str),
}

impl<'a> Token<'a> {
    fn param(&self) -> Option<&'a str> {
        match *self {
            Token::Param(name) => Some(name),
            Token::Sql(_) => None,
        }
    }
}

/// Where the scanner is inside the query text.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Scan {
    Sql,

    /// Inside `'...'`
    Literal,

    /// Inside `"..."`
    Identifier,

    /// After `--`, up to the end of the line
    LineComment,

    /// Inside `/* ... */`
    BlockComment,
}

/// Splits a query into SQL text and placeholders.
///
/// Placeholders are only recognized in plain SQL text. String literals, quoted identifiers
/// and comments are copied verbatim; a doubled quote (`''`, `""`) leaves and re-enters the
/// same state. `::` never starts a placeholder (PostgreSQL casts).
fn tokenize(query: &str) -> Vec<Token<'_>> {
    let bytes = query.as_bytes();
    let mut tokens = vec![];
    let mut start = 0;
    let mut pos = 0;
    let mut state = Scan::Sql;

    while pos < bytes.len() {
        let next = bytes.get(pos + 1).copied();

        match (state, bytes[pos]) {
            (Scan::Literal, b'\'') | (Scan::Identifier, b'"') | (Scan::LineComment, b'\n') => {
                state = Scan::Sql;
                pos += 1;
            }
            (Scan::BlockComment, b'*') if next == Some(b'/') => {
                state = Scan::Sql;
                pos += 2;
            }
            (Scan::Sql, b'\'') => {
                state = Scan::Literal;
                pos += 1;
            }
            (Scan::Sql, b'"') => {
                state = Scan::Identifier;
                pos += 1;
            }
            (Scan::Sql, b'-') if next == Some(b'-') => {
                state = Scan::LineComment;
                pos += 2;
            }
            (Scan::Sql, b'/') if next == Some(b'*') => {
                state = Scan::BlockComment;
                pos += 2;
            }
            (Scan::Sql, b':') if next == Some(b':') => pos += 2,
            (Scan::Sql, b':') if next.is_some_and(|b| b.is_ascii_alphabetic()) => {
                let name_start = pos + 1;
                let mut name_end = name_start + 1;

                while name_end < bytes.len()
                    && (bytes[name_end].is_ascii_alphanumeric() || bytes[name_end] == b'_')
                {
                    name_end += 1;
                }

                if start < pos {
                    tokens.push(Token::Sql(&query[start..pos]));
                }
                tokens.push(Token::Param(&query[name_start..name_end]));

                start = name_end;
                pos = name_end;
            }
            _ => pos += 1,
        }
    }

    if start < bytes.len() {
        tokens.push(Token::Sql(&query[start..]));
    }

    tokens
}
