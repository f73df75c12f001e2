use std::rc::Rc;

use indexmap::IndexMap;
use scalegen_core::TypeId;

use super::Value;
use crate::scale::{Error, Input, decode_compact, encode_compact};
use crate::typegen::{
    Builtin, CaseLayout, Descriptor, FieldLayout, RuntimeType, Shape, TypeGenerator,
};

type Result<T> = std::result::Result<T, Error>;

/// Encodes and decodes [`Value`]s with the descriptors cached in a generator.
///
/// Only resolved ids can be used; the codec never resolves anything itself.
pub struct ValueCodec<'g, 't> {
    generator: &'g TypeGenerator<'t>,
}

fn mismatch(desc: &Descriptor, value: &Value) -> Error {
    Error::ValueMismatch {
        expected: desc.display_name.clone(),
        found: value.kind().to_string(),
    }
}

/// The first case whose flag is set.
fn selected_case<'c>(
    desc: &Descriptor,
    cases: &'c [CaseLayout],
    record: &IndexMap<String, Value>,
) -> Result<&'c CaseLayout> {
    cases
        .iter()
        .find(|case| record.get(&case.flag) == Some(&Value::Bool(true)))
        .ok_or_else(|| Error::NoVariantSelected(desc.display_name.clone()))
}

fn check_len(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(Error::LengthMismatch { expected, found });
    }
    Ok(())
}

impl<'g, 't> ValueCodec<'g, 't> {
    pub fn new(generator: &'g TypeGenerator<'t>) -> Self {
        Self { generator }
    }

    fn descriptor(&self, id: TypeId) -> Result<Rc<Descriptor>> {
        self.generator
            .descriptor(id)
            .ok_or(Error::UnresolvedType(id.0))
    }

    /// The value a generated `Blank` implementation produces.
    pub fn blank(&self, desc: &Descriptor) -> Result<Value> {
        let value = match &desc.shape {
            Shape::Unit => Value::Unit,
            Shape::Primitive(builtin) => blank_primitive(*builtin),
            Shape::Wide(RuntimeType::I128) => Value::Int(0),
            Shape::Wide(RuntimeType::U256 | RuntimeType::I256) => Value::Word([0; 32]),
            Shape::Wide(_) | Shape::Compact => Value::UInt(0),
            Shape::Array { len, elem } => {
                let elem = self.descriptor(*elem)?;
                let item = self.blank(&elem)?;
                Value::Seq(vec![item; *len as usize])
            }
            Shape::Sequence { .. } => Value::Seq(Vec::new()),
            Shape::Tuple(members) if members.is_empty() => Value::Unit,
            Shape::Tuple(members) => Value::Seq(
                members
                    .iter()
                    .map(|m| self.blank(&*self.descriptor(*m)?))
                    .collect::<Result<_>>()?,
            ),
            Shape::Composite(fields) => Value::Record(self.blank_fields(fields)?),
            Shape::Variant(cases) => {
                let mut record = IndexMap::new();
                for case in cases {
                    record.insert(case.flag.clone(), Value::Bool(false));
                    record.extend(self.blank_fields(&case.fields)?);
                }
                Value::Record(record)
            }
        };
        Ok(value)
    }

    fn blank_fields(&self, fields: &[FieldLayout]) -> Result<IndexMap<String, Value>> {
        fields
            .iter()
            .map(|field| {
                let value = if field.indirect {
                    Value::Indirect(None)
                } else {
                    self.blank(&*self.descriptor(field.ty)?)?
                };
                Ok((field.name.clone(), value))
            })
            .collect()
    }

    pub fn encode(&self, desc: &Descriptor, value: &Value) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode_to(desc, value, &mut out)?;
        Ok(out)
    }

    pub fn encode_to(&self, desc: &Descriptor, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        match (&desc.shape, value) {
            (Shape::Unit, _) => Ok(()),
            (Shape::Primitive(builtin), _) => encode_primitive(desc, *builtin, value, out),
            (Shape::Wide(RuntimeType::U128), Value::UInt(n)) => {
                out.extend_from_slice(&n.to_le_bytes());
                Ok(())
            }
            (Shape::Wide(RuntimeType::I128), Value::Int(n)) => {
                out.extend_from_slice(&n.to_le_bytes());
                Ok(())
            }
            (Shape::Wide(RuntimeType::U256 | RuntimeType::I256), Value::Word(word)) => {
                out.extend_from_slice(word);
                Ok(())
            }
            (Shape::Compact, Value::UInt(n)) => {
                encode_compact(*n, out);
                Ok(())
            }
            (Shape::Array { len, elem }, Value::Seq(items)) => {
                check_len(*len as usize, items.len())?;
                self.encode_items(*elem, items, out)
            }
            (Shape::Sequence { elem }, Value::Seq(items)) => {
                encode_compact(items.len() as u128, out);
                self.encode_items(*elem, items, out)
            }
            (Shape::Tuple(members), Value::Unit) if members.is_empty() => Ok(()),
            (Shape::Tuple(members), Value::Seq(items)) => {
                check_len(members.len(), items.len())?;
                for (member, item) in members.iter().zip(items) {
                    self.encode_to(&*self.descriptor(*member)?, item, out)?;
                }
                Ok(())
            }
            (Shape::Composite(fields), Value::Record(record)) => {
                self.encode_fields(desc, fields, record, out)
            }
            (Shape::Variant(cases), Value::Record(record)) => {
                let case = selected_case(desc, cases, record)?;
                out.push(case.index);
                self.encode_fields(desc, &case.fields, record, out)
            }
            _ => Err(mismatch(desc, value)),
        }
    }

    /// Wire index of the case a variant value selects.
    pub fn variant_index(&self, desc: &Descriptor, value: &Value) -> Result<u8> {
        match (&desc.shape, value) {
            (Shape::Variant(cases), Value::Record(record)) => {
                Ok(selected_case(desc, cases, record)?.index)
            }
            _ => Err(mismatch(desc, value)),
        }
    }

    fn encode_items(&self, elem: TypeId, items: &[Value], out: &mut Vec<u8>) -> Result<()> {
        let elem = self.descriptor(elem)?;
        items
            .iter()
            .try_for_each(|item| self.encode_to(&elem, item, out))
    }

    fn encode_fields(
        &self,
        desc: &Descriptor,
        fields: &[FieldLayout],
        record: &IndexMap<String, Value>,
        out: &mut Vec<u8>,
    ) -> Result<()> {
        for field in fields {
            let value = record.get(&field.name).ok_or_else(|| Error::ValueMismatch {
                expected: format!("{}.{}", desc.display_name, field.name),
                found: "nothing".to_string(),
            })?;
            let value = match (field.indirect, value) {
                (true, Value::Indirect(Some(inner))) => inner,
                (true, Value::Indirect(None)) => {
                    return Err(Error::EmptyIndirect(format!(
                        "{}.{}",
                        desc.display_name, field.name
                    )));
                }
                (_, value) => value,
            };
            self.encode_to(&*self.descriptor(field.ty)?, value, out)?;
        }
        Ok(())
    }

    /// Decode a complete value; trailing bytes are an error.
    pub fn decode(&self, desc: &Descriptor, bytes: &[u8]) -> Result<Value> {
        let mut input = Input::new(bytes);
        let value = self.decode_from(desc, &mut input)?;
        if !input.is_empty() {
            return Err(Error::TrailingInput(input.remaining()));
        }
        Ok(value)
    }

    pub fn decode_from(&self, desc: &Descriptor, input: &mut Input<'_>) -> Result<Value> {
        let value = match &desc.shape {
            Shape::Unit => Value::Unit,
            Shape::Primitive(builtin) => decode_primitive(*builtin, input)?,
            Shape::Wide(RuntimeType::U128) => {
                Value::UInt(u128::from_le_bytes(input.read_array()?))
            }
            Shape::Wide(RuntimeType::I128) => {
                Value::Int(i128::from_le_bytes(input.read_array()?))
            }
            Shape::Wide(_) => Value::Word(input.read_array()?),
            Shape::Compact => Value::UInt(decode_compact(input)?),
            Shape::Array { len, elem } => {
                Value::Seq(self.decode_items(*elem, *len as usize, input)?)
            }
            Shape::Sequence { elem } => {
                let len = decode_compact(input)?;
                let len = usize::try_from(len).map_err(|_| Error::CompactOverflow(usize::BITS))?;
                Value::Seq(self.decode_items(*elem, len, input)?)
            }
            Shape::Tuple(members) if members.is_empty() => Value::Unit,
            Shape::Tuple(members) => Value::Seq(
                members
                    .iter()
                    .map(|m| self.decode_from(&*self.descriptor(*m)?, input))
                    .collect::<Result<_>>()?,
            ),
            Shape::Composite(fields) => {
                let mut record = IndexMap::new();
                self.decode_fields(fields, &mut record, input)?;
                Value::Record(record)
            }
            Shape::Variant(cases) => {
                let Value::Record(mut record) = self.blank(desc)? else {
                    return Err(Error::ValueMismatch {
                        expected: desc.display_name.clone(),
                        found: "non-record blank".to_string(),
                    });
                };
                let index = input.read_byte()?;
                let Some(case) = cases.iter().find(|case| case.index == index) else {
                    return Err(Error::UnrecognizedVariant {
                        type_name: desc.display_name.clone(),
                        index,
                    });
                };
                record.insert(case.flag.clone(), Value::Bool(true));
                self.decode_fields(&case.fields, &mut record, input)?;
                Value::Record(record)
            }
        };
        Ok(value)
    }

    fn decode_items(&self, elem: TypeId, len: usize, input: &mut Input<'_>) -> Result<Vec<Value>> {
        let elem = self.descriptor(elem)?;
        let mut items = Vec::with_capacity(len.min(input.remaining()));
        for _ in 0..len {
            items.push(self.decode_from(&elem, input)?);
        }
        Ok(items)
    }

    fn decode_fields(
        &self,
        fields: &[FieldLayout],
        record: &mut IndexMap<String, Value>,
        input: &mut Input<'_>,
    ) -> Result<()> {
        for field in fields {
            let value = self.decode_from(&*self.descriptor(field.ty)?, input)?;
            let value = if field.indirect {
                Value::indirect(value)
            } else {
                value
            };
            record.insert(field.name.clone(), value);
        }
        Ok(())
    }
}

fn blank_primitive(builtin: Builtin) -> Value {
    match builtin {
        Builtin::Bool => Value::Bool(false),
        Builtin::Char => Value::Char('\0'),
        Builtin::Str => Value::Str(String::new()),
        Builtin::U8 | Builtin::U16 | Builtin::U32 | Builtin::U64 => Value::UInt(0),
        Builtin::I8 | Builtin::I16 | Builtin::I32 | Builtin::I64 => Value::Int(0),
    }
}

fn encode_primitive(
    desc: &Descriptor,
    builtin: Builtin,
    value: &Value,
    out: &mut Vec<u8>,
) -> Result<()> {
    let width = builtin.width().unwrap_or_default();
    match (builtin, value) {
        (Builtin::Bool, Value::Bool(b)) => out.push(u8::from(*b)),
        (Builtin::Char, Value::Char(c)) => out.extend_from_slice(&u32::from(*c).to_le_bytes()),
        (Builtin::Str, Value::Str(s)) => {
            encode_compact(s.len() as u128, out);
            out.extend_from_slice(s.as_bytes());
        }
        (Builtin::U8 | Builtin::U16 | Builtin::U32 | Builtin::U64, Value::UInt(n))
            if *n >> (width * 8) == 0 =>
        {
            out.extend_from_slice(&n.to_le_bytes()[..width]);
        }
        (Builtin::I8 | Builtin::I16 | Builtin::I32 | Builtin::I64, Value::Int(n))
            if fits_signed(*n, width) =>
        {
            out.extend_from_slice(&n.to_le_bytes()[..width]);
        }
        _ => return Err(mismatch(desc, value)),
    }
    Ok(())
}

fn fits_signed(n: i128, width: usize) -> bool {
    let bits = width * 8;
    let min = -(1i128 << (bits - 1));
    let max = (1i128 << (bits - 1)) - 1;
    (min..=max).contains(&n)
}

fn decode_primitive(builtin: Builtin, input: &mut Input<'_>) -> Result<Value> {
    let value = match builtin {
        Builtin::Bool => match input.read_byte()? {
            0 => Value::Bool(false),
            1 => Value::Bool(true),
            b => return Err(Error::InvalidBool(b)),
        },
        Builtin::Char => {
            let raw = u32::from_le_bytes(input.read_array()?);
            Value::Char(char::from_u32(raw).ok_or(Error::InvalidChar(raw))?)
        }
        Builtin::Str => {
            let len = decode_compact(input)?;
            let len = usize::try_from(len).map_err(|_| Error::CompactOverflow(usize::BITS))?;
            let bytes = input.read_bytes(len)?;
            let s = std::str::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)?;
            Value::Str(s.to_string())
        }
        Builtin::U8 => Value::UInt(u128::from(input.read_byte()?)),
        Builtin::U16 => Value::UInt(u128::from(u16::from_le_bytes(input.read_array()?))),
        Builtin::U32 => Value::UInt(u128::from(u32::from_le_bytes(input.read_array()?))),
        Builtin::U64 => Value::UInt(u128::from(u64::from_le_bytes(input.read_array()?))),
        Builtin::I8 => Value::Int(i128::from(i8::from_le_bytes(input.read_array()?))),
        Builtin::I16 => Value::Int(i128::from(i16::from_le_bytes(input.read_array()?))),
        Builtin::I32 => Value::Int(i128::from(i32::from_le_bytes(input.read_array()?))),
        Builtin::I64 => Value::Int(i128::from(i64::from_le_bytes(input.read_array()?))),
    };
    Ok(value)
}
