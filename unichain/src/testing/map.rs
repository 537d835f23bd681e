//! Utilities for testing map implementations.
use crate::core::HashMap;
use crate::testing::Generate;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Generates pairs with unique keys suitable for inserting into a map.
pub fn generate_map_data<R, K, V>(
    rng: &mut R,
    size: usize,
    key_params: &K::GenerateParams,
    val_params: &V::GenerateParams,
) -> Box<[(K, V)]>
where
    R: Rng,
    K: Eq + Hash + Clone + Generate<R>,
    V: Eq + Hash + Clone + Generate<R>,
{
    let keys = K::generate_many(rng, key_params, size).into_vec();
    let vals = (0..size)
        .map(|_| V::generate(rng, val_params))
        .collect::<Vec<_>>();
    keys.into_iter().zip(vals).collect()
}

/// Generates `count` keys that are absent from `data`.
fn absent_keys<R, K, V>(rng: &mut R, data: &[(K, V)], count: usize) -> Vec<K>
where
    R: Rng,
    K: Eq + Hash + Generate<R>,
{
    let keys: HashSet<&K> = data.iter().map(|(k, _)| k).collect();
    let mut absent = Vec::with_capacity(count);
    while absent.len() < count {
        let key = K::generate(rng, &<K as Generate<R>>::GenerateParams::default());
        if !keys.contains(&key) {
            absent.push(key);
        }
    }
    absent
}

/// Tests that every inserted pair can be found and that keys never inserted can't.
pub fn test_insert_get<R, K, V, M>(rng: &mut R, map: &mut M, data: &[(K, V)])
where
    R: Rng,
    K: Eq + Hash + Clone + Generate<R> + Debug,
    V: Clone + PartialEq + Debug,
    M: HashMap<K, V>,
{
    for (i, (key, val)) in data.iter().enumerate() {
        map.insert(key.clone(), val.clone()).unwrap();
        assert_eq!(map.len(), i + 1, "Key: {:?}", key);
    }
    assert_eq!(map.is_empty(), data.is_empty());

    for (key, val) in data {
        assert_eq!(map.get(key), Some(val), "Key: {:?}", key);
    }
    for key in absent_keys(rng, data, data.len().div_ceil(3)) {
        assert_eq!(map.get(&key), None, "Key: {:?}", key);
    }
}

/// Tests that inserting an existing key replaces its value without adding an entry.
///
/// Expects `map` to already contain every pair of `data`.
pub fn test_last_write_wins<K, V, M>(map: &mut M, data: &[(K, V)], new_vals: &[V])
where
    K: Eq + Clone + Debug,
    V: Clone + PartialEq + Debug,
    M: HashMap<K, V>,
{
    debug_assert_eq!(data.len(), new_vals.len());

    let len = map.len();
    for ((key, _), new_val) in data.iter().zip(new_vals) {
        map.insert(key.clone(), new_val.clone()).unwrap();
        assert_eq!(map.len(), len, "Key: {:?}", key);
    }
    for ((key, _), new_val) in data.iter().zip(new_vals) {
        assert_eq!(map.get(key), Some(new_val), "Key: {:?}", key);
    }
}

/// Tests removal of present and absent keys.
///
/// Expects `map` to contain exactly the pairs of `data`.
pub fn test_remove<R, K, V, M>(rng: &mut R, map: &mut M, data: &[(K, V)])
where
    R: Rng,
    K: Eq + Hash + Clone + Generate<R> + Debug,
    V: Clone + PartialEq + Debug,
    M: HashMap<K, V>,
{
    let mut shuffled = data.to_vec();
    shuffled.shuffle(rng);
    let (removed, kept) = shuffled.split_at(shuffled.len() / 2);

    for key in absent_keys(rng, data, 10) {
        assert_eq!(map.remove(&key), None, "Key: {:?}", key);
    }
    assert_eq!(map.len(), data.len());

    for (key, val) in removed {
        assert_eq!(map.remove(key).as_ref(), Some(val), "Key: {:?}", key);
        assert_eq!(map.remove(key), None, "Key: {:?}", key);
    }
    assert_eq!(map.len(), kept.len());

    for (key, _) in removed {
        assert_eq!(map.get(key), None, "Key: {:?}", key);
    }
    for (key, val) in kept {
        assert_eq!(map.get(key), Some(val), "Key: {:?}", key);
    }
}

/// Generates tests for a map type for integer keys.
#[macro_export]
macro_rules! generate_map_int_tests {
    ($Map:tt, $factory:expr, $type:ty) => {
        compose_idents!(test_fn = [test_insert_get_remove_, $type], {
            #[test]
            fn test_fn() {
                use crate::testing::*;
                use rand::rngs::ThreadRng;

                let mut rng = rand::rng();

                let map_size: usize = if <$type>::BITS >= u16::BITS {
                    2000
                } else {
                    (1_usize << <$type>::BITS) / 2
                };

                let data = generate_map_data::<_, $type, u128>(
                    &mut rng,
                    map_size,
                    &<$type as Generate<ThreadRng>>::GenerateParams::default(),
                    &<u128 as Generate<ThreadRng>>::GenerateParams::default(),
                );
                let new_vals: Vec<u128> = data.iter().map(|(_, v)| v.wrapping_add(1)).collect();

                let mut map: $Map<$type, u128> = $factory();
                test_insert_get(&mut rng, &mut map, &data);
                test_last_write_wins(&mut map, &data, &new_vals);

                let data: Vec<($type, u128)> = data
                    .iter()
                    .map(|(k, _)| *k)
                    .zip(new_vals)
                    .collect();
                test_remove(&mut rng, &mut map, &data);
            }
        });
    };
}

/// Generates tests for a map type for string keys.
#[macro_export]
macro_rules! generate_map_str_tests {
    ($Map:tt, $factory:expr) => {
        #[test]
        fn test_insert_get_remove_str() {
            use crate::testing::*;
            use rand::rngs::ThreadRng;

            let mut rng = rand::rng();
            let data = generate_map_data::<_, String, u128>(
                &mut rng,
                2000,
                &<String as Generate<ThreadRng>>::GenerateParams::default(),
                &<u128 as Generate<ThreadRng>>::GenerateParams::default(),
            );
            let new_vals: Vec<u128> = data.iter().map(|(_, v)| v.wrapping_add(1)).collect();

            let mut map: $Map<String, u128> = $factory();
            test_insert_get(&mut rng, &mut map, &data);
            test_last_write_wins(&mut map, &data, &new_vals);

            let data: Vec<(String, u128)> = data
                .iter()
                .map(|(k, _)| k.clone())
                .zip(new_vals)
                .collect();
            test_remove(&mut rng, &mut map, &data);
        }
    };
}

/// Generates tests for a map type for all supported key types.
#[macro_export]
macro_rules! generate_map_tests {
    ($Map:tt, $factory:expr) => {
        use crate::generate_map_int_tests;
        use crate::generate_map_str_tests;
        use compose_idents::compose_idents;

        generate_map_int_tests!($Map, $factory, u8);
        generate_map_int_tests!($Map, $factory, i8);
        generate_map_int_tests!($Map, $factory, u16);
        generate_map_int_tests!($Map, $factory, i16);
        generate_map_int_tests!($Map, $factory, u32);
        generate_map_int_tests!($Map, $factory, i32);
        generate_map_int_tests!($Map, $factory, u64);
        generate_map_int_tests!($Map, $factory, i64);
        generate_map_int_tests!($Map, $factory, u128);
        generate_map_int_tests!($Map, $factory, i128);
        generate_map_str_tests!($Map, $factory);
    };
}
