use std::io::BufRead;

use crate::building_block::{
  circuit::Record,
  gate_type::GateType,
};
use crate::error::Error;

// Circuit description format, one record per line:
//   GATE <KIND> <NAME>    declares a gate
//   <SRC> <DST>           adds a fan-in edge SRC -> DST
// Fields are whitespace-delimited; blank lines are skipped.

pub fn parse_circuit_line(line_no: usize, line: &str) -> Result<Option<Record>, Error> {
  let tokens: Vec<&str> = line.split_whitespace().collect();

  let malformed = || Error::MalformedLine {
    line: line_no,
    text: line.trim_end().to_string(),
  };

  match tokens.as_slice() {
    [] => Ok(None),
    ["GATE", kind, name] => {
      let gate_type = GateType::from_token(kind).ok_or_else(malformed)?;
      Ok(Some(Record::Gate {
        gate_type,
        name: name.to_string(),
      }))
    },
    ["GATE", ..] => Err(malformed()),
    [src, dst] => Ok(Some(Record::Connection {
      src: src.to_string(),
      dst: dst.to_string(),
    })),
    _ => Err(malformed()),
  }
}

pub fn parse_circuit<R: BufRead>(reader: R) -> Result<Vec<Record>, Error> {
  let mut records = Vec::new();
  for (i, line) in reader.lines().enumerate() {
    let line = line.map_err(|_| Error::MalformedLine {
      line: i + 1,
      text: "<unreadable>".to_string(),
    })?;
    if let Some(record) = parse_circuit_line(i + 1, &line)? {
      records.push(record);
    }
  }
  Ok(records)
}

// One input vector per line: a string of '0'/'1' characters, each
// mapping positionally to the next INPUT gate by declaration order.
pub fn parse_vector_line(line: &str) -> Result<Vec<bool>, Error> {
  line
    .trim_end()
    .chars()
    .map(|c| match c {
      '0' => Ok(false),
      '1' => Ok(true),
      _ => Err(Error::BadVectorChar(c)),
    })
    .collect()
}
