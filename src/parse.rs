use std::str::FromStr;

use failure::{format_err, Error};
use nom::types::CompleteStr;
use nom::*;

use crate::ipid::Ipid;

macro_rules! impl_from_str {
    ($ty:ty, $parse:ident) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let (remaining, res) = $parse(CompleteStr(s)).map_err(|err| {
                    format_err!("parse {} failed: {}, {}", stringify!($ty), s, err)
                })?;

                if !remaining.is_empty() {
                    Err(format_err!(
                        "parse {} failed, remaining: {}",
                        stringify!($ty),
                        remaining
                    ))
                } else {
                    Ok(res)
                }
            }
        }
    };
}

impl_from_str!(Ipid, parse_ipid);

// decimal digits only; a value above 65535 fails the u16 conversion and is
// rejected rather than truncated.
named!(parse_ipid<CompleteStr, Ipid>, map_res!(digit, |s: CompleteStr| s.parse::<u16>().map(Ipid)));
