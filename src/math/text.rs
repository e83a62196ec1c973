//! Text form of the matrix types: values within a row are separated by `,`
//! and rows by `;`, e.g. `1,0,0;0,1,0;0,0,1`.
//!
//! Parsing accepts `,`, `;` and whitespace interchangeably as separators and
//! only checks the total element count.

use crate::{
    math::{Matrix33, Matrix34, Matrix44},
    MathError, MathResult,
};
use std::{fmt, str::FromStr};

fn write_rows<R: AsRef<[f32]>>(f: &mut fmt::Formatter<'_>, rows: &[R]) -> fmt::Result {
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            f.write_str(";")?;
        }
        for (j, value) in row.as_ref().iter().enumerate() {
            if j > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
        }
    }
    Ok(())
}

fn parse_values(s: &str, expected: usize) -> MathResult<Vec<f32>> {
    let values = s
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|err| MathError::Parse(format!("{:?} is not a number: {}", token, err)))
        })
        .collect::<MathResult<Vec<f32>>>()?;
    if values.len() != expected {
        return Err(MathError::Parse(format!(
            "expected {} matrix elements but found {}",
            expected,
            values.len()
        )));
    }
    Ok(values)
}

macro_rules! impl_matrix_text {
    ($name:ident, $rows:expr, $cols:expr) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_rows(f, &self.0)
            }
        }

        impl FromStr for $name {
            type Err = MathError;

            fn from_str(s: &str) -> MathResult<$name> {
                let values = parse_values(s, $rows * $cols)?;
                let mut m = [[0.0f32; $cols]; $rows];
                for (i, value) in values.into_iter().enumerate() {
                    m[i / $cols][i % $cols] = value;
                }
                Ok($name::from_array(m))
            }
        }
    };
}

impl_matrix_text!(Matrix33, 3, 3);
impl_matrix_text!(Matrix34, 3, 4);
impl_matrix_text!(Matrix44, 4, 4);

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vector3;

    #[test]
    fn prints_rows() {
        assert_eq!("1,0,0;0,1,0;0,0,1", Matrix33::identity().to_string());
        let m = Matrix34::create_translation(Vector3::new(1.5, -2.0, 3.25));
        assert_eq!("1,0,0,1.5;0,1,0,-2;0,0,1,3.25", m.to_string());
    }

    #[test]
    fn reads_back_what_it_prints() {
        let m = Matrix44::create(
            Vector3::new(2.0, 2.0, 2.0),
            crate::math::Quaternion::create_rotation_z(0.3),
            Vector3::new(0.1, 0.2, 0.3),
        );
        assert_eq!(Ok(m), m.to_string().parse::<Matrix44>());
    }

    #[test]
    fn tolerates_separator_styles() {
        let m: Matrix33 = "1 2 3\n4 5 6\n7 8 9".parse().unwrap();
        assert_eq!(Matrix33::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0), m);
        let m: Matrix33 = "1, 2, 3; 4, 5, 6; 7, 8, 9".parse().unwrap();
        assert_eq!(6.0, m.m12());
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            Err(MathError::Parse("expected 9 matrix elements but found 2".into())),
            "1,2".parse::<Matrix33>()
        );
        match "1,2,3,4,5,6,7,8,nope".parse::<Matrix33>() {
            Err(MathError::Parse(message)) => assert!(message.contains("\"nope\"")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
