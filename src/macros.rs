#[macro_export]
macro_rules! fields {
    ($($meta:expr => $value:expr),* $(,)?) => {
        vec![$($crate::Field::new($meta, $value)),*]
    };
}
