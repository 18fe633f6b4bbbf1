use std::collections::HashSet;

use inetdefs::table::{self, Category, ConstValue};

// ---------- [Lookup] ----------

#[test]
fn known_names_resolve_to_header_values() {
    assert_eq!(table::lookup("AF_INET").unwrap(), ConstValue::Int(2));
    assert_eq!(table::lookup("SOL_IP").unwrap(), ConstValue::Int(0));
    assert_eq!(table::lookup("CLOCK_MONOTONIC").unwrap(), ConstValue::Int(1));
    assert_eq!(table::lookup("SOMAXCONN").unwrap(), ConstValue::Int(128));
    assert_eq!(table::lookup("IPV6_V6ONLY").unwrap(), ConstValue::Int(26));
    assert_eq!(
        table::lookup("INADDR_LOOPBACK").unwrap(),
        ConstValue::Uint(0x7f00_0001)
    );
}

#[test]
fn lookup_twice_returns_the_same_value() {
    for e in table::entries() {
        let first = table::lookup(e.name).unwrap();
        let second = table::lookup(e.name).unwrap();
        assert_eq!(first, second, "binding for {} moved between lookups", e.name);
    }
}

#[test]
fn unknown_name_is_surfaced_to_the_caller() {
    let err = table::lookup("AF_NO_SUCH_FAMILY").unwrap_err();
    assert_eq!(err.name(), "AF_NO_SUCH_FAMILY");
    assert_eq!(
        err.to_string(),
        "unknown constant name: AF_NO_SUCH_FAMILY"
    );
}

#[test]
fn entry_carries_the_category() {
    let e = table::entry("AF_INET").unwrap();
    assert_eq!(e.category, Category::SocketFamily);
    let e = table::entry("IP_TOS").unwrap();
    assert_eq!(e.category, Category::IpOption);
}

// ---------- [Platform resolution] ----------

#[test]
fn each_name_is_bound_exactly_once() {
    let names: HashSet<&str> = table::entries().iter().map(|e| e.name).collect();
    assert_eq!(names.len(), table::entries().len());
}

#[cfg(target_pointer_width = "64")]
#[test]
fn pthread_sizes_match_the_64_bit_layout() {
    assert_eq!(
        table::lookup("__SIZEOF_PTHREAD_MUTEX_T").unwrap(),
        ConstValue::Uint(40)
    );
    assert_eq!(
        table::lookup("__SIZEOF_PTHREAD_ATTR_T").unwrap(),
        ConstValue::Uint(56)
    );
    assert_eq!(table::lookup("__WORDSIZE").unwrap(), ConstValue::Uint(64));
}

#[cfg(target_pointer_width = "32")]
#[test]
fn pthread_sizes_match_the_32_bit_layout() {
    assert_eq!(
        table::lookup("__SIZEOF_PTHREAD_MUTEX_T").unwrap(),
        ConstValue::Uint(24)
    );
    assert_eq!(
        table::lookup("__SIZEOF_PTHREAD_ATTR_T").unwrap(),
        ConstValue::Uint(36)
    );
    assert_eq!(table::lookup("__WORDSIZE").unwrap(), ConstValue::Uint(32));
}

#[cfg(target_endian = "little")]
#[test]
fn byte_order_resolves_to_little_endian() {
    assert_eq!(table::lookup("BYTE_ORDER").unwrap(), ConstValue::Int(1234));
}

#[cfg(target_endian = "big")]
#[test]
fn byte_order_resolves_to_big_endian() {
    assert_eq!(table::lookup("BYTE_ORDER").unwrap(), ConstValue::Int(4321));
}

// ---------- [Iteration and reverse lookup] ----------

#[test]
fn socket_families_cover_the_pf_and_af_names() {
    let fams: Vec<_> = table::entries_in(Category::SocketFamily).collect();
    // 45 PF_* names and their 45 AF_* mirrors.
    assert_eq!(fams.len(), 90);
    assert!(fams.iter().all(|e| {
        e.name.starts_with("PF_") || e.name.starts_with("AF_")
    }));
}

#[test]
fn reverse_lookup_returns_the_first_registered_alias() {
    assert_eq!(table::name_of(Category::SocketFamily, 2), Some("PF_INET"));
    // PF_LOCAL, PF_UNIX and PF_FILE all map to 1.
    assert_eq!(table::name_of(Category::SocketFamily, 1), Some("PF_LOCAL"));
    assert_eq!(table::name_of(Category::ClockId, 1), Some("CLOCK_MONOTONIC"));
    assert_eq!(table::name_of(Category::SocketFamily, 9999), None);
}

// ---------- [Export] ----------

#[test]
fn cbor_export_holds_every_binding() {
    let bytes = table::export_cbor().unwrap();
    let decoded: serde_cbor::Value = serde_cbor::from_slice(&bytes).unwrap();
    match decoded {
        serde_cbor::Value::Array(items) => {
            assert_eq!(items.len(), table::entries().len())
        }
        other => panic!("expected a CBOR array, got {:?}", other),
    }
}
