#[rustversion::attr(not(nightly), ignore)]
#[test]
#[cfg_attr(miri, ignore)] // unsupported operation: extern static `pidfd_spawnp` is not supported by Miri
fn func_label_one_of_many() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/func_label_one_of_many.rs");
    t.pass("tests/ui/func_label_one_of_many_namespaced.rs");
    t.compile_fail("tests/ui/func_label_one_of_many_invalid_option.rs");
    t.compile_fail("tests/ui/func_label_one_of_many_invalid_name.rs");
}
