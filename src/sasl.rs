//! SASL frame bodies defined in AMQP 1.0 specification Part 5.3

use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::{read_uint, Decode};
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::primitives::{Binary, Symbol};
use crate::read::Read;
use crate::write::Write;

/// 5.3.3.1 SASL Mechanisms
///
/// Advertises the available SASL mechanisms that can be used for
/// authentication, in decreasing level of preference. It is invalid for the
/// list to be null or empty.
/// <type name="sasl-mechanisms" class="composite" source="list" provides="sasl-frame">
///     <descriptor name="amqp:sasl-mechanisms:list" code="0x00000000:0x00000040"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaslMechanisms {
    /// <field name="sasl-server-mechanisms" type="symbol" multiple="true" mandatory="true"/>
    pub sasl_server_mechanisms: Vec<Symbol>,
}

impl Encode for SaslMechanisms {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::SaslMechanisms,
            &[EncodeField::value(&self.sasl_server_mechanisms)],
        )
    }
}

impl Decode for SaslMechanisms {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::SaslMechanisms,
            &mut [DecodeField::required(
                &mut self.sasl_server_mechanisms,
                "sasl-server-mechanisms",
            )],
        )
    }
}

/// 5.3.3.2 SASL Init
///
/// Selects the sasl mechanism and provides the initial response if needed.
/// <type name="sasl-init" class="composite" source="list" provides="sasl-frame">
///     <descriptor name="amqp:sasl-init:list" code="0x00000000:0x00000041"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaslInit {
    /// <field name="mechanism" type="symbol" mandatory="true"/>
    pub mechanism: Symbol,

    /// <field name="initial-response" type="binary"/>
    pub initial_response: Option<Binary>,

    /// <field name="hostname" type="string"/>
    pub hostname: Option<String>,
}

impl Encode for SaslInit {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::SaslInit,
            &[
                EncodeField::value(&self.mechanism),
                EncodeField::option(&self.initial_response),
                EncodeField::option(&self.hostname),
            ],
        )
    }
}

impl Decode for SaslInit {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::SaslInit,
            &mut [
                DecodeField::required(&mut self.mechanism, "mechanism"),
                DecodeField::value(&mut self.initial_response),
                DecodeField::value(&mut self.hostname),
            ],
        )
    }
}

/// 5.3.3.3 SASL Challenge
///
/// Send the SASL challenge data as defined by the SASL specification.
/// <type name="sasl-challenge" class="composite" source="list" provides="sasl-frame">
///     <descriptor name="amqp:sasl-challenge:list" code="0x00000000:0x00000042"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaslChallenge {
    /// <field name="challenge" type="binary" mandatory="true"/>
    pub challenge: Binary,
}

impl Encode for SaslChallenge {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::SaslChallenge,
            &[EncodeField::value(&self.challenge)],
        )
    }
}

impl Decode for SaslChallenge {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::SaslChallenge,
            &mut [DecodeField::required(&mut self.challenge, "challenge")],
        )
    }
}

/// 5.3.3.4 SASL Response
///
/// Send the SASL response data as defined by the SASL specification.
/// <type name="sasl-response" class="composite" source="list" provides="sasl-frame">
///     <descriptor name="amqp:sasl-response:list" code="0x00000000:0x00000043"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaslResponse {
    /// <field name="response" type="binary" mandatory="true"/>
    pub response: Binary,
}

impl Encode for SaslResponse {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::SaslResponse,
            &[EncodeField::value(&self.response)],
        )
    }
}

impl Decode for SaslResponse {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::SaslResponse,
            &mut [DecodeField::required(&mut self.response, "response")],
        )
    }
}

/// 5.3.3.5 SASL Outcome
///
/// Indicates the outcome of the sasl dialog.
/// <type name="sasl-outcome" class="composite" source="list" provides="sasl-frame">
///     <descriptor name="amqp:sasl-outcome:list" code="0x00000000:0x00000044"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaslOutcome {
    /// <field name="code" type="sasl-code" mandatory="true"/>
    pub code: SaslCode,

    /// <field name="additional-data" type="binary"/>
    pub additional_data: Option<Binary>,
}

impl Encode for SaslOutcome {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::SaslOutcome,
            &[
                EncodeField::value(&self.code),
                EncodeField::option(&self.additional_data),
            ],
        )
    }
}

impl Decode for SaslOutcome {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::SaslOutcome,
            &mut [
                DecodeField::required(&mut self.code, "code"),
                DecodeField::value(&mut self.additional_data),
            ],
        )
    }
}

/// 5.3.3.6 SASL Code
///
/// Codes to indicate the outcome of the sasl dialog.
/// <type name="sasl-code" class="restricted" source="ubyte">
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum SaslCode {
    /// Connection authentication succeeded
    #[default]
    Ok = 0,
    /// Connection authentication failed due to an unspecified problem with
    /// the supplied credentials
    Auth = 1,
    /// Connection authentication failed due to a system error
    Sys = 2,
    /// Connection authentication failed due to an unrecoverable system error
    SysPerm = 3,
    /// Connection authentication failed due to a transient system error
    SysTemp = 4,
}

impl Encode for SaslCode {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        (*self as u8).encode(writer)
    }
}

impl Decode for SaslCode {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = match read_uint(reader)? {
            0 => SaslCode::Ok,
            1 => SaslCode::Auth,
            2 => SaslCode::Sys,
            3 => SaslCode::SysPerm,
            4 => SaslCode::SysTemp,
            _ => return Err(Error::InvalidValue),
        };
        Ok(())
    }
}
