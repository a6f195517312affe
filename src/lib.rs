#![forbid(unsafe_code)]

//! svot builds SVG markup as a tree of named elements with ordered,
//! string-keyed attributes, and serializes it to a deterministic textual
//! form.
//!
//! All tree data lives in a central [`Svot`] holder; nodes are addressed
//! through lightweight copyable [`Node`] handles and names are interned
//! to [`NameId`] values.
//!
//! ```rust
//! let mut svot = svot::Svot::new();
//! let root = svot.new_root();
//! let rect = svot.new_rect(0, 0, 200, 100, "blue");
//! svot.append(root, rect)?;
//! let output = svot.to_string(root);
//! assert!(output.ends_with("</svg>"));
//! # Ok::<(), svot::Error>(())
//! ```
//!
//! The crate also carries a few standalone helpers: higher-order function
//! utilities ([`every_other`], [`flatten`], [`filter_with`],
//! [`limit_calls`]), tabular conversion ([`rows_to_records`]) and film
//! dataset statistics ([`actor_counts`] and friends) used by the bundled
//! report binary.

mod access;
mod attraccess;
mod attributes;
mod creation;
mod error;
mod hof;
mod manipulation;
mod name;
mod serialize;
mod serializer;
mod stats;
mod svgvalue;
mod svotdata;
mod table;
mod valueaccess;

pub use access::NodeEdge;
pub use attributes::{AttributeValue, Attributes};
pub use creation::SVG_NAMESPACE;
pub use error::Error;
pub use hof::{every_other, filter_with, flatten, limit_calls};
pub use name::NameId;
pub use stats::{actor_counts, longest_fun_fact, titles_by_year};
pub use svgvalue::{Element, Text, Value, ValueType};
pub use svotdata::{Node, Svot};
pub use table::{rows_to_records, Record, Table};
