use serde_json::Value;
use std::io::{self, Write};

enum Frame<'a> {
    Key(&'a str, &'a Value, usize),
    Node(&'a Value, usize),
}

/// 逐層列出所有 key，縮排代表深度；只供除錯，不影響擷取結果
pub fn write_key_trace<W: Write>(data: &Value, out: &mut W) -> io::Result<()> {
    let mut pending = vec![Frame::Node(data, 0)];

    while let Some(frame) = pending.pop() {
        match frame {
            Frame::Key(key, child, level) => {
                writeln!(out, "{}Key: {}", "  ".repeat(level), key)?;
                pending.push(Frame::Node(child, level + 1));
            }
            Frame::Node(Value::Object(obj), level) => {
                pending.extend(
                    obj.iter()
                        .rev()
                        .map(|(key, child)| Frame::Key(key.as_str(), child, level)),
                );
            }
            Frame::Node(Value::Array(items), level) => {
                pending.extend(items.iter().rev().map(|item| Frame::Node(item, level + 1)));
            }
            Frame::Node(_, _) => {}
        }
    }
    Ok(())
}
