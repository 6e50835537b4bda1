use std::io::Cursor;

use fluid_amount::io::buffer::VarLong;
use fluid_amount::{BigFluidAmount, FluidAmount};
use proptest::prelude::*;

use crate::strategy::amount;

proptest! {
    #[test]
    fn fixed_bytes(value in amount()) {
        prop_assert_eq!(FluidAmount::from_bytes(value.to_bytes()), Ok(value));

        let mut buffer = Vec::new();
        value.write_to(&mut buffer).unwrap();
        prop_assert_eq!(buffer.len(), FluidAmount::BYTES);
        prop_assert_eq!(FluidAmount::read_from(&mut Cursor::new(buffer)).unwrap(), value);
    }

    #[test]
    fn variable_length(value in amount()) {
        let mut buffer = Vec::new();
        value.write_var_to(&mut buffer).unwrap();
        let expected = [value.whole(), value.numerator(), value.denominator()]
            .into_iter()
            .map(|component| VarLong(component).written_size())
            .sum::<usize>();
        prop_assert_eq!(buffer.len(), expected);
        prop_assert_eq!(FluidAmount::read_var_from(&mut Cursor::new(buffer)).unwrap(), value);
    }

    #[test]
    fn var_long(value in any::<i64>()) {
        let mut buffer = Vec::new();
        VarLong(value).write(&mut buffer).unwrap();
        prop_assert_eq!(buffer.len(), VarLong(value).written_size());
        prop_assert!(buffer.len() <= VarLong::MAX_SIZE);
        prop_assert_eq!(VarLong::read(&mut Cursor::new(buffer)).unwrap(), value);
    }

    #[test]
    fn big_bytes(left in amount(), right in amount()) {
        let value = left * right;
        let mut buffer = Vec::new();
        value.write_to(&mut buffer).unwrap();
        prop_assert_eq!(BigFluidAmount::read_from(&mut Cursor::new(buffer)).unwrap(), value);
    }

    #[test]
    fn json(value in amount()) {
        let text = serde_json::to_string(&value).unwrap();
        prop_assert_eq!(serde_json::from_str::<FluidAmount>(&text).unwrap(), value);

        let big = BigFluidAmount::from(value) * value;
        let text = serde_json::to_string(&big).unwrap();
        prop_assert_eq!(serde_json::from_str::<BigFluidAmount>(&text).unwrap(), big);
    }
}
