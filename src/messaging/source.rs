use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::Decode;
use crate::definitions::{Fields, Seconds};
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::primitives::Symbol;
use crate::read::Read;
use crate::write::Write;

use super::{Address, FilterSet, Outcome};

/// Terminus expiry policy of "session-end", the declared default for both
/// source and target
pub const EXPIRY_POLICY_SESSION_END: &str = "session-end";

/// 3.5.3 Source
///
/// <type name="source" class="composite" source="list" provides="source">
///     <descriptor name="amqp:source:list" code="0x00000000:0x00000028"/>
/// </type>
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// <field name="address" type="*" requires="address"/>
    pub address: Option<Address>,

    /// <field name="durable" type="terminus-durability" default="none"/>
    pub durable: u32,

    /// <field name="expiry-policy" type="terminus-expiry-policy" default="session-end"/>
    pub expiry_policy: Symbol,

    /// <field name="timeout" type="seconds" default="0"/>
    pub timeout: Seconds,

    /// <field name="dynamic" type="boolean" default="false"/>
    pub dynamic: bool,

    /// <field name="dynamic-node-properties" type="node-properties"/>
    pub dynamic_node_properties: Option<Fields>,

    /// <field name="distribution-mode" type="symbol" requires="distribution-mode"/>
    pub distribution_mode: Option<Symbol>,

    /// <field name="filter" type="filter-set"/>
    pub filter: Option<FilterSet>,

    /// <field name="default-outcome" type="*" requires="outcome"/>
    pub default_outcome: Option<Outcome>,

    /// <field name="outcomes" type="symbol" multiple="true"/>
    pub outcomes: Option<Vec<Symbol>>,

    /// <field name="capabilities" type="symbol" multiple="true"/>
    pub capabilities: Option<Vec<Symbol>>,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            address: None,
            durable: 0,
            expiry_policy: Symbol::from(EXPIRY_POLICY_SESSION_END),
            timeout: 0,
            dynamic: false,
            dynamic_node_properties: None,
            distribution_mode: None,
            filter: None,
            default_outcome: None,
            outcomes: None,
            capabilities: None,
        }
    }
}

impl Encode for Source {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Source,
            &[
                EncodeField::option(&self.address),
                EncodeField::omit_if(&self.durable, self.durable == 0),
                EncodeField::omit_if(
                    &self.expiry_policy,
                    self.expiry_policy.as_str() == EXPIRY_POLICY_SESSION_END,
                ),
                EncodeField::omit_if(&self.timeout, self.timeout == 0),
                EncodeField::omit_if(&self.dynamic, !self.dynamic),
                EncodeField::option(&self.dynamic_node_properties),
                EncodeField::option(&self.distribution_mode),
                EncodeField::option(&self.filter),
                EncodeField::option(&self.default_outcome),
                EncodeField::option(&self.outcomes),
                EncodeField::option(&self.capabilities),
            ],
        )
    }
}

impl Decode for Source {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Source,
            &mut [
                DecodeField::value(&mut self.address),
                DecodeField::default_uint(&mut self.durable, 0),
                DecodeField::default_symbol(&mut self.expiry_policy, EXPIRY_POLICY_SESSION_END),
                DecodeField::default_uint(&mut self.timeout, 0),
                DecodeField::value(&mut self.dynamic),
                DecodeField::value(&mut self.dynamic_node_properties),
                DecodeField::value(&mut self.distribution_mode),
                DecodeField::value(&mut self.filter),
                DecodeField::value(&mut self.default_outcome),
                DecodeField::value(&mut self.outcomes),
                DecodeField::value(&mut self.capabilities),
            ],
        )
    }
}
