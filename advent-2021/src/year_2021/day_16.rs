//! Day 16: Packet Decoder
//!
//! A BITS transmission is a hex string encoding one outer packet. Every
//! packet starts with a 3-bit version and a 3-bit type id. Type 4 carries a
//! literal in 5-bit groups whose high bit flags continuation; every other
//! type is an operator whose sub-packets are delimited either by their total
//! bit length (15-bit field) or by their count (11-bit field).

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 16, tags = ["2021", "parsing", "bits"])]
pub struct Solver;

/// Deepest operator nesting accepted before the stream is rejected
pub const MAX_DEPTH: usize = 64;

const LITERAL: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Sum,
    Product,
    Minimum,
    Maximum,
    GreaterThan,
    LessThan,
    EqualTo,
}

impl Operator {
    fn from_type_id(id: u8) -> Option<Self> {
        Some(match id {
            0 => Operator::Sum,
            1 => Operator::Product,
            2 => Operator::Minimum,
            3 => Operator::Maximum,
            5 => Operator::GreaterThan,
            6 => Operator::LessThan,
            7 => Operator::EqualTo,
            _ => return None,
        })
    }

    fn is_comparison(self) -> bool {
        matches!(
            self,
            Operator::GreaterThan | Operator::LessThan | Operator::EqualTo
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Literal(u64),
    Operator(Operator, Vec<Packet>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub version: u8,
    pub payload: Payload,
}

impl Packet {
    pub fn version_sum(&self) -> u64 {
        let nested = match &self.payload {
            Payload::Literal(_) => 0,
            Payload::Operator(_, children) => children.iter().map(Packet::version_sum).sum(),
        };
        self.version as u64 + nested
    }

    /// Evaluate the expression; `None` if an intermediate value overflows
    pub fn value(&self) -> Option<u64> {
        let (op, children) = match &self.payload {
            Payload::Literal(n) => return Some(*n),
            Payload::Operator(op, children) => (*op, children),
        };
        let mut values = children.iter().map(Packet::value);
        match op {
            Operator::Sum => values.try_fold(0u64, |acc, v| acc.checked_add(v?)),
            Operator::Product => values.try_fold(1u64, |acc, v| acc.checked_mul(v?)),
            Operator::Minimum => values.try_fold(u64::MAX, |acc, v| Some(acc.min(v?))),
            Operator::Maximum => values.try_fold(0, |acc, v| Some(acc.max(v?))),
            Operator::GreaterThan => Some(u64::from(values.next()?? > values.next()??)),
            Operator::LessThan => Some(u64::from(values.next()?? < values.next()??)),
            Operator::EqualTo => Some(u64::from(values.next()?? == values.next()??)),
        }
    }
}

/// Cursor over the bits of a hex string
struct Bits {
    nibbles: Vec<u8>,
    pos: usize,
}

impl Bits {
    fn from_hex(hex: &str) -> Result<Self, ParseError> {
        let nibbles = hex
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("{:?} is not a hex digit", c)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { nibbles, pos: 0 })
    }

    fn len(&self) -> usize {
        self.nibbles.len() * 4
    }

    fn read(&mut self, count: usize) -> Result<u64, ParseError> {
        if self.pos + count > self.len() {
            return Err(ParseError::InvalidFormat(format!(
                "transmission ends after {} bits, wanted {} more at bit {}",
                self.len(),
                count,
                self.pos
            )));
        }
        let mut value = 0;
        for _ in 0..count {
            let bit = self.nibbles[self.pos / 4] >> (3 - self.pos % 4) & 1;
            value = value << 1 | bit as u64;
            self.pos += 1;
        }
        Ok(value)
    }
}

/// Decode one packet starting at the cursor, returning it with the number of
/// bits it occupied.
fn decode(bits: &mut Bits, depth: usize) -> Result<(Packet, usize), ParseError> {
    if depth > MAX_DEPTH {
        return Err(ParseError::InvalidFormat(format!(
            "packets nested deeper than {}",
            MAX_DEPTH
        )));
    }
    let start = bits.pos;
    let version = bits.read(3)? as u8;
    let type_id = bits.read(3)? as u8;

    let payload = if type_id == LITERAL {
        let mut value = 0u64;
        loop {
            let group = bits.read(5)?;
            if value >> 60 != 0 {
                return Err(ParseError::InvalidFormat("literal exceeds 64 bits".into()));
            }
            value = value << 4 | (group & 0xF);
            if group & 0x10 == 0 {
                break;
            }
        }
        Payload::Literal(value)
    } else {
        let op = Operator::from_type_id(type_id)
            .ok_or_else(|| ParseError::InvalidFormat(format!("unknown type id {}", type_id)))?;
        let mut children = Vec::new();
        if bits.read(1)? == 0 {
            let length = bits.read(15)? as usize;
            let mut used = 0;
            while used < length {
                let (child, size) = decode(bits, depth + 1)?;
                children.push(child);
                used += size;
            }
            if used != length {
                return Err(ParseError::InvalidFormat(format!(
                    "sub-packets span {} bits, header says {}",
                    used, length
                )));
            }
        } else {
            let count = bits.read(11)?;
            for _ in 0..count {
                children.push(decode(bits, depth + 1)?.0);
            }
        }
        if op.is_comparison() && children.len() != 2 {
            return Err(ParseError::InvalidFormat(format!(
                "{:?} needs exactly two sub-packets, got {}",
                op,
                children.len()
            )));
        }
        if children.is_empty() {
            return Err(ParseError::InvalidFormat(format!("{:?} has no sub-packets", op)));
        }
        Payload::Operator(op, children)
    };

    Ok((Packet { version, payload }, bits.pos - start))
}

/// Decode the outermost packet of a hex transmission; trailing padding is
/// ignored.
pub fn parse_transmission(hex: &str) -> Result<Packet, ParseError> {
    let mut bits = Bits::from_hex(hex.trim())?;
    if bits.len() == 0 {
        return Err(ParseError::MissingData("empty transmission".into()));
    }
    decode(&mut bits, 0).map(|(packet, _)| packet)
}

impl AocParser for Solver {
    type SharedData<'a> = Packet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_transmission(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(packet: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(packet.version_sum().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(packet: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        packet
            .value()
            .map(|v| v.to_string())
            .ok_or_else(|| SolveError::failed("packet value overflows 64 bits"))
    }
}
