use tba::Result;

/// Output is buffered in memory and printed once processing is complete
pub fn build_writer() -> Vec<u8> {
    return vec![];
}

pub fn write_to_string(writer: Vec<u8>) -> Result<String> {
    let string = String::from_utf8(writer)?;
    return Ok(string);
}
