pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[macro_export]
macro_rules! verify_data {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_data(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_data(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_format(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn invalid_format(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidFormat {
        element: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn check_len(values: &[u32]) -> super::Result<usize> {
        verify_arg!(values, !values.is_empty());
        verify_data!(values, values.len() % 2 == 0);
        Ok(values.len())
    }

    #[test]
    fn test_verify_macros() {
        assert_eq!(check_len(&[1, 2]).unwrap(), 2);

        match check_len(&[]).unwrap_err().into_kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "values");
                assert_eq!(message, "!values.is_empty()");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }

        assert!(matches!(
            check_len(&[1]).unwrap_err().into_kind(),
            ErrorKind::InvalidFormat { .. }
        ));
    }
}
