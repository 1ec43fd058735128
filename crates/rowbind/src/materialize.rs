use crate::{err, Error, FieldDescriptor, Model, Result, TypeDescriptor, Value};

use rowbind_core::driver::Cursor;

/// Maps each returned column to the destination field stored in it.
///
/// Columns with no matching persisted field (computed or aliased columns, or columns of
/// another type) map to `None` and their values are dropped.
struct Plan<'a> {
    targets: Vec<Option<&'a FieldDescriptor>>,
}

impl<'a> Plan<'a> {
    fn new(descriptor: &'a TypeDescriptor, columns: &[String]) -> Plan<'a> {
        let targets = columns
            .iter()
            .map(|column| descriptor.field_for_column(column))
            .collect::<Vec<_>>();

        tracing::trace!(
            type_name = descriptor.name(),
            columns = columns.len(),
            mapped = targets.iter().flatten().count(),
            "planned row mapping"
        );

        Plan { targets }
    }

    /// Loads one row into `dst`. Fields without a returned column are left untouched.
    fn load<M: Model>(&self, dst: &mut M, row: Vec<Value>) -> Result<()> {
        if row.len() != self.targets.len() {
            return Err(err!(
                "row has {} values but the cursor reported {} columns",
                row.len(),
                self.targets.len()
            ));
        }

        for (target, value) in self.targets.iter().zip(row) {
            if let Some(field) = target {
                dst.set(&field.name, value)?;
            }
        }

        Ok(())
    }
}

async fn next_row(cursor: &mut dyn Cursor) -> Result<Option<Vec<Value>>> {
    cursor
        .next()
        .await
        .map_err(|e| e.context(err!("failed to fetch row")))
}

/// Populates `dst` from the cursor's first row; remaining rows are not read.
///
/// With zero rows, or when a value fails to convert, `dst` is left unmodified.
pub(crate) async fn first<M: Model + Default>(
    mut cursor: Box<dyn Cursor>,
    descriptor: &TypeDescriptor,
    dst: &mut M,
) -> Result<()> {
    let plan = Plan::new(descriptor, cursor.columns());

    match next_row(cursor.as_mut()).await? {
        Some(row) => {
            // Every value converts into scratch before `dst` is touched
            plan.load(&mut M::default(), row.clone())?;
            plan.load(dst, row)
        }
        None => Err(Error::no_rows(descriptor.name())),
    }
}

/// Loads every row into a fresh `M::default()`, in cursor order.
pub(crate) async fn all<M: Model + Default>(
    mut cursor: Box<dyn Cursor>,
    descriptor: &TypeDescriptor,
) -> Result<Vec<M>> {
    let plan = Plan::new(descriptor, cursor.columns());
    let mut records = vec![];

    while let Some(row) = next_row(cursor.as_mut()).await? {
        let mut record = M::default();
        plan.load(&mut record, row)?;
        records.push(record);
    }

    Ok(records)
}
