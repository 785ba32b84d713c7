//! Types defined in AMQP 1.0 specification Part 3: Messaging

mod delivery_state;
mod format;
mod source;
mod target;

pub use delivery_state::*;
pub use format::*;
pub use source::*;
pub use target::*;

use crate::primitives::{OrderedMap, Symbol};
use crate::value::Value;

/// 3.2.10 Annotations
/// <type name="annotations" class="restricted" source="map"/>
pub type Annotations = OrderedMap<Symbol, Value>;

/// 3.5.8 Filter Set
/// <type name="filter-set" class="restricted" source="map"/>
pub type FilterSet = OrderedMap<Symbol, Value>;

/// 3.2.15 Address String
/// Address of a node.
/// <type name="address-string" class="restricted" source="string" provides="address"/>
pub type Address = String;
