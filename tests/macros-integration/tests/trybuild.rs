//! trybuild 编译测试

#[test]
fn trybuild_bean_macro() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/ok_bean.rs");
    t.pass("tests/trybuild/bean_with_dependencies.rs");
}
