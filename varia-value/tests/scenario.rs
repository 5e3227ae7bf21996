use std::collections::HashMap;

use pretty_assertions::assert_eq;
use varia_dynamic::Dynamic;
use varia_utils::{hash_one, string_vec};
use varia_value::{array, mapping, Array, Mapping, Value, ValueError, ValueType};

fn round_trip(value: &Value) -> Value {
    Value::from_dynamic(&value.to_dynamic()).expect("every value converts back")
}

#[test]
fn test_mapping_round_trip_then_mutate_in_place() {
    let object = mapping! { "a" => 1, "b" => array![1, 2, 3] };
    let mut rebuilt = round_trip(&Value::from(object.clone()));
    assert_eq!(rebuilt, Value::from(object));

    let mapping = rebuilt.get_mut::<Mapping>().unwrap();
    mapping.at_mut("b").unwrap().get_mut::<Array>().unwrap().push(4);
    assert_eq!(mapping.at("b").unwrap().get::<Array>().unwrap().len(), 4);
    assert_eq!(mapping.at("b"), Ok(&Value::from(array![1, 2, 3, 4])));

    assert_eq!(
        mapping.at("a").unwrap().get::<Array>(),
        Err(ValueError::TypeMismatch { expected: ValueType::Array, found: ValueType::Int })
    );
}

#[test]
fn test_int_boundaries() {
    let numbers = [
        0,
        -1,
        1,
        1 << 26,
        1 << 27,
        1 << 28,
        -(1 << 26),
        -(1 << 27),
        -(1 << 28),
        (1 << 26) - 1,
        (1 << 27) - 1,
        (1 << 28) - 1,
        -((1 << 26) - 1),
        -((1 << 27) - 1),
        -((1 << 28) - 1),
        i32::MAX,
        i32::MIN,
    ];

    let array: Array = numbers.iter().copied().collect();
    let copy = array.clone();
    let converted = round_trip(&Value::from(array.clone()));

    assert_eq!(array.len(), copy.len());
    for (i, number) in numbers.iter().enumerate() {
        assert_eq!(array.at(i).unwrap().type_of(), ValueType::Int);
        assert_eq!(array.at(i).unwrap().value(0), *number);
        assert_eq!(copy.at(i).unwrap().value(0), *number);
    }
    assert_eq!(converted, Value::from(array));
}

#[test]
fn test_unsigned_boundaries() {
    let numbers = [0, 1, 1 << 26, 1 << 27, 1 << 28, (1 << 28) - 1, u32::MAX];

    let array: Array = numbers.iter().copied().collect();
    for (i, number) in numbers.iter().enumerate() {
        assert_eq!(array[i].type_of(), ValueType::UInt);
        assert_eq!(array[i].value(0_u32), *number);
        assert_eq!(array[i].value(-1), -1);
    }
    assert_eq!(round_trip(&Value::from(array.clone())), Value::from(array));
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn test_float_boundaries() {
    let numbers = [
        0.0,
        -1.0,
        1.0,
        (1_i64 << 54) as f64,
        (1_i64 << 55) as f64,
        (1_i64 << 56) as f64,
        -((1_i64 << 54) as f64),
        -((1_i64 << 55) as f64),
        -((1_i64 << 56) as f64),
        1.1,
        0.1,
        -0.1,
        -1.1,
        1e200,
        -1e200,
    ];

    let array: Array = numbers.iter().copied().collect();
    let converted = round_trip(&Value::from(array.clone()));
    for (i, number) in numbers.iter().enumerate() {
        assert_eq!(array[i].type_of(), ValueType::Float);
        assert_eq!(array[i].value(f64::NAN).to_bits(), number.to_bits());
    }
    assert_eq!(converted, Value::from(array));
}

#[test]
fn test_values_as_keys() {
    let string_list = string_vec!["30", "40"];
    let complex_key1 = mapping! { "key1" => "value 1" };
    let complex_key2 = mapping! { "key1" => "value 2" };
    assert_ne!(complex_key1, complex_key2);

    let mut map = HashMap::new();
    map.insert(Value::from(10), "int");
    map.insert(Value::from(15_u32), "uint");
    map.insert(Value::from("20"), "string");
    map.insert(Value::from(string_list.clone()), "string list");
    map.insert(Value::from(complex_key1.clone()), "mapping 1");
    map.insert(Value::from(complex_key2.clone()), "mapping 2");
    assert_eq!(map.len(), 6);

    assert_eq!(map.get(&Value::from(10)), Some(&"int"));
    assert_eq!(map.get(&Value::from(15_u32)), Some(&"uint"));
    assert_eq!(map.get(&Value::from("20")), Some(&"string"));
    assert_eq!(map.get(&Value::from(string_list)), Some(&"string list"));
    assert_eq!(map.get(&round_trip(&Value::from(complex_key1))), Some(&"mapping 1"));
    assert_eq!(map.get(&Value::from(complex_key2)), Some(&"mapping 2"));
}

#[test]
fn test_swap_and_assign() {
    let mut v = Value::from(10);
    let mut v2 = v.clone();
    v2.clone_from(&v);
    assert_eq!(v, v2);

    v2 = Value::from("other");
    std::mem::swap(&mut v, &mut v2);
    assert_eq!(v, Value::from("other"));
    assert_eq!(v2, Value::from(10));
}

#[test]
fn test_deep_nesting() {
    let mut deep = Value::from(array![mapping! { "leaf" => true }]);
    for depth in 0..8 {
        deep = if depth % 2 == 0 {
            Value::from(mapping! { format!("level{depth}") => deep })
        } else {
            Value::from(array![deep, Value::Null])
        };
    }
    let copy = deep.clone();
    let converted = round_trip(&deep);

    assert_eq!(deep, copy);
    assert_eq!(copy, converted);
    assert_eq!(deep, converted);
    assert_eq!(hash_one(&deep), hash_one(&copy));
    assert_eq!(hash_one(&deep), hash_one(&converted));

    let mut changed = deep.clone();
    let mut cursor = &mut changed;
    while !matches!(cursor, Value::Bool(_)) {
        cursor = match cursor {
            Value::Array(array) => &mut array[0],
            Value::Mapping(mapping) => mapping.values_mut().next().unwrap(),
            _ => unreachable!("only containers lead to the leaf"),
        };
    }
    assert_eq!(cursor.type_of(), ValueType::Bool);
    *cursor = Value::from(false);
    assert_ne!(changed, deep);
}

#[test]
fn test_empty_containers() {
    assert_eq!(Array::new(), Array::default());
    assert_eq!(hash_one(&Array::new()), hash_one(&Array::default()));
    assert_ne!(Value::from(Array::new()), Value::from(Mapping::new()));
    assert_ne!(Value::from(Array::new()), Value::from(Vec::<String>::new()));
    assert_eq!(Value::from(Array::new()).to_dynamic(), Dynamic::List(Vec::new()));
    assert_eq!(Value::from(Mapping::new()).to_dynamic(), Dynamic::Hash(HashMap::new()));
}
