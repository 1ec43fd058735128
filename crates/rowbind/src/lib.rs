// Lets `#[derive(Model)]` expand inside this crate's own tests.
extern crate self as rowbind;

mod bind;
pub use bind::Params;

mod cache;
pub use cache::TypeCache;

mod mapper;
pub use mapper::{Builder, Mapper};

mod materialize;

mod model;
pub use model::Model;

mod primitive;
pub use primitive::Primitive;

pub mod driver {
    pub use rowbind_core::driver::*;

    #[cfg(feature = "sqlite")]
    pub use rowbind_driver_sqlite as sqlite;
}

pub use rowbind_core::{
    err,
    schema::{self, FieldDescriptor, FieldShape, ShapeKind, TypeDescriptor, TypeShape},
    stmt::{Statement, Type, Value},
    Error, Result,
};

pub use rowbind_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, FieldShape, Model, Primitive, Result, TypeShape, Value};
    pub use std::{option::Option, result::Result::Err, result::Result::Ok};
}
