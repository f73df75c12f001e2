// Generated by scalegen. Do not edit.

use scalegen_lib::scale as rt;

/// Generated from `pallet_balances::AccountData` (id 3).
///
/// Balance data.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountData {
    /// Spendable.
    pub free: u32,
    pub frozen: bool,
}

impl rt::Blank for AccountData {
    fn blank() -> Self {
        Self {
            free: rt::Blank::blank(),
            frozen: rt::Blank::blank(),
        }
    }
}

impl rt::Encode for AccountData {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), rt::Error> {
        rt::Encode::encode_to(&self.free, out)?;
        rt::Encode::encode_to(&self.frozen, out)?;
        Ok(())
    }
}

impl rt::Decode for AccountData {
    fn decode_into(&mut self, input: &mut rt::Input<'_>) -> Result<(), rt::Error> {
        rt::Decode::decode_into(&mut self.free, input)?;
        rt::Decode::decode_into(&mut self.frozen, input)?;
        Ok(())
    }
}

/// Generated from `Choice` (id 4).
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub is_ok: bool,
    pub is_err: bool,
    pub as_err: String,
}

impl rt::Blank for Choice {
    fn blank() -> Self {
        Self {
            is_ok: false,
            is_err: false,
            as_err: rt::Blank::blank(),
        }
    }
}

impl rt::Encode for Choice {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), rt::Error> {
        if self.is_ok {
            out.push(0);
            return Ok(());
        }
        if self.is_err {
            out.push(1);
            rt::Encode::encode_to(&self.as_err, out)?;
            return Ok(());
        }
        Err(rt::Error::NoVariantSelected("Choice".to_string()))
    }
}

impl rt::Decode for Choice {
    fn decode_into(&mut self, input: &mut rt::Input<'_>) -> Result<(), rt::Error> {
        *self = rt::Blank::blank();
        match input.read_byte()? {
            0 => {
                self.is_ok = true;
            }
            1 => {
                self.is_err = true;
                rt::Decode::decode_into(&mut self.as_err, input)?;
            }
            index => {
                return Err(rt::Error::UnrecognizedVariant {
                    type_name: "Choice".to_string(),
                    index,
                });
            }
        }
        Ok(())
    }
}

impl Choice {
    /// Wire index of the selected case.
    pub fn variant_index(&self) -> Result<u8, rt::Error> {
        if self.is_ok {
            return Ok(0);
        }
        if self.is_err {
            return Ok(1);
        }
        Err(rt::Error::NoVariantSelected("Choice".to_string()))
    }
}

/// Generated from `sp_runtime::Phase` (id 5).
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub is_idle: bool,
    pub is_busy: bool,
    pub as_busy: u32,
}

impl rt::Blank for Phase {
    fn blank() -> Self {
        Self {
            is_idle: false,
            is_busy: false,
            as_busy: rt::Blank::blank(),
        }
    }
}

impl rt::Encode for Phase {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), rt::Error> {
        if self.is_idle {
            out.push(2);
            return Ok(());
        }
        if self.is_busy {
            out.push(5);
            rt::Encode::encode_to(&self.as_busy, out)?;
            return Ok(());
        }
        Err(rt::Error::NoVariantSelected("Phase".to_string()))
    }
}

impl rt::Decode for Phase {
    fn decode_into(&mut self, input: &mut rt::Input<'_>) -> Result<(), rt::Error> {
        *self = rt::Blank::blank();
        match input.read_byte()? {
            2 => {
                self.is_idle = true;
            }
            5 => {
                self.is_busy = true;
                rt::Decode::decode_into(&mut self.as_busy, input)?;
            }
            index => {
                return Err(rt::Error::UnrecognizedVariant {
                    type_name: "Phase".to_string(),
                    index,
                });
            }
        }
        Ok(())
    }
}

impl Phase {
    /// Wire index of the selected case.
    pub fn variant_index(&self) -> Result<u8, rt::Error> {
        if self.is_idle {
            return Ok(2);
        }
        if self.is_busy {
            return Ok(5);
        }
        Err(rt::Error::NoVariantSelected("Phase".to_string()))
    }
}
