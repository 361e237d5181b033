use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SeqErr {
    #[error("[Bad Arg] Invalid value `{value}` for argument `{arg}` of op `{op}`: {reason}")]
    InvalidArg { op: &'static str, arg: &'static str, value: String, reason: &'static str },
}

impl SeqErr {
    pub(crate) fn invalid_arg(op: &'static str, arg: &'static str, value: impl ToString, reason: &'static str) -> Self {
        SeqErr::InvalidArg { op, arg, value: value.to_string(), reason }
    }
}
