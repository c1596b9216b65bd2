use std::fmt;

use super::Array;
use crate::math::product_of;

/// Nested-bracket rendering of `data` laid out as `shape`.
fn render(shape: &[usize], data: &[f64], out: &mut String) {
    match shape {
        [] => out.push_str("[]"),
        [n] => {
            out.push('[');
            // a header grown by push_eles may hold more than `n` values
            for (idx, value) in data.iter().take(*n).enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                out.push_str(&value.to_string());
            }
            out.push(']');
        }
        [n, rest @ ..] => {
            let stride = product_of(rest);
            out.push('[');
            for i in 0..*n {
                if i > 0 {
                    out.push_str(", \n");
                }
                render(rest, &data[i * stride..(i + 1) * stride], out);
            }
            out.push(']');
        }
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut body = String::new();
        render(&self.shape, &self.data(), &mut body);
        write!(f, "ndarray<{:?}>\n({})", self.shape, body)
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("shape", &self.shape)
            .field("data", &&*self.data())
            .finish()
    }
}
