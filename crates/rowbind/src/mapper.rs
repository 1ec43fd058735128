mod builder;
pub use builder::Builder;

use crate::{bind, err, materialize, Model, Params, Result, Statement, TypeCache, TypeDescriptor};

use rowbind_core::driver::{Connection, Flavor};

use std::sync::Arc;

/// Runs queries with named placeholders and loads their rows into [`Model`] types.
///
/// A `Mapper` is a cheap handle over a shared [`TypeCache`]; clones share the cache. It
/// holds no connection: every call borrows one.
///
/// ```ignore
/// let mapper = Mapper::new();
/// let users: Vec<User> = mapper
///     .all(&mut conn, "select * from users where karma > :Karma", &filter)
///     .await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    cache: Arc<TypeCache>,
}

impl Mapper {
    /// A mapper with a fresh, empty cache.
    pub fn new() -> Mapper {
        Mapper::default()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A mapper that shares `cache` with other mappers.
    pub fn with_cache(cache: Arc<TypeCache>) -> Mapper {
        Mapper { cache }
    }

    pub fn cache(&self) -> &Arc<TypeCache> {
        &self.cache
    }

    /// Builds, or returns the cached, descriptor for `M`.
    pub fn register<M: Model>(&self) -> Result<Arc<TypeDescriptor>> {
        self.cache.register::<M>()
    }

    /// Rewrites `query` for `flavor` without executing it.
    pub fn bind<P: Params + ?Sized>(
        &self,
        flavor: Flavor,
        query: &str,
        params: &P,
    ) -> Result<Statement> {
        bind::bind(&self.cache, flavor, query, params)
    }

    /// Runs `query` and loads its first row into `out`.
    ///
    /// Returns a no rows error when the query returns nothing. On any error `out` is left
    /// untouched; fields without a returned column keep their current values.
    pub async fn first<C, P, M>(
        &self,
        conn: &mut C,
        query: &str,
        params: &P,
        out: &mut M,
    ) -> Result<()>
    where
        C: Connection + ?Sized,
        P: Params + ?Sized,
        M: Model + Default,
    {
        let stmt = self.bind(conn.flavor(), query, params)?;
        let descriptor = self.cache.register::<M>()?;

        let cursor = conn
            .query(stmt)
            .await
            .map_err(|e| e.context(err!("failed to execute query")))?;

        materialize::first(cursor, &descriptor, out).await
    }

    /// Runs `query` and loads every row into a new `M`, in result order.
    pub async fn all<C, P, M>(&self, conn: &mut C, query: &str, params: &P) -> Result<Vec<M>>
    where
        C: Connection + ?Sized,
        P: Params + ?Sized,
        M: Model + Default,
    {
        let stmt = self.bind(conn.flavor(), query, params)?;
        let descriptor = self.cache.register::<M>()?;

        let cursor = conn
            .query(stmt)
            .await
            .map_err(|e| e.context(err!("failed to execute query")))?;

        materialize::all(cursor, &descriptor).await
    }

    /// Runs a statement that returns no rows and reports how many rows it affected.
    pub async fn execute<C, P>(&self, conn: &mut C, query: &str, params: &P) -> Result<u64>
    where
        C: Connection + ?Sized,
        P: Params + ?Sized,
    {
        let stmt = self.bind(conn.flavor(), query, params)?;

        conn.execute(stmt)
            .await
            .map_err(|e| e.context(err!("failed to execute statement")))
    }
}
