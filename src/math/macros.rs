/// Named `mRC` getters and setters over a matrix stored as rows of vectors.
macro_rules! element_accessors {
    ($($get:ident, $set:ident => $row:expr, $col:expr;)*) => {
        $(
            #[inline]
            pub fn $get(&self) -> f32 {
                self.0[$row].0[$col]
            }

            #[inline]
            pub fn $set(&mut self, value: f32) {
                self.0[$row].0[$col] = value;
            }
        )*
    };
}
