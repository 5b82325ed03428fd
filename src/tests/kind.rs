use crate::{Param, ParamKind, SimpleType};

#[test]
fn test_kind_is_fixed_per_variant() {
    // The tag never depends on the operands
    assert_eq!(Param::not_equal(var!(x), num!(5)).kind(), ParamKind::NotEqual);
    assert_eq!(Param::not_equal(text!("a"), text!("b")).kind(), ParamKind::NotEqual);
    assert_eq!(
        Param::not_equal(
            Param::and(var!(p), var!(q)),
            Param::divide(num!(1), num!(2)),
        ).kind(),
        ParamKind::NotEqual,
    );

    assert_eq!(num!(3).kind(), ParamKind::Number);
    assert_eq!(var!(x).kind(), ParamKind::Variable);
    assert_eq!(text!("hi").kind(), ParamKind::Text);
    assert_eq!(Param::add(num!(1), num!(2)).kind(), ParamKind::Add);
    assert_eq!(Param::equal(num!(1), num!(2)).kind(), ParamKind::Equal);
    assert_eq!(Param::less_or_equal(num!(1), num!(2)).kind(), ParamKind::LessOrEqual);
    assert_eq!(Param::or(var!(p), var!(q)).kind(), ParamKind::Or);
    assert_eq!(num!(1).in_parentheses().kind(), ParamKind::Parentheses);
}

#[test]
fn test_simple_type() {
    assert_eq!(num!(3).simple_type(), SimpleType::Number);
    assert_eq!(var!(x).simple_type(), SimpleType::Number);
    assert_eq!(text!("hi").simple_type(), SimpleType::Text);

    // Comparisons classify as numeric, even over text operands
    assert_eq!(Param::not_equal(var!(x), num!(5)).simple_type(), SimpleType::Number);
    assert_eq!(Param::not_equal(text!("a"), text!("b")).simple_type(), SimpleType::Number);
    assert_eq!(Param::and(var!(p), var!(q)).simple_type(), SimpleType::Number);

    // Parentheses are transparent
    assert_eq!(text!("hi").in_parentheses().simple_type(), SimpleType::Text);
    assert_eq!(num!(1).in_parentheses().simple_type(), SimpleType::Number);
}

#[test]
fn test_operator_text() {
    assert_eq!(Param::not_equal(var!(x), num!(5)).operator_text(), Some(" != "));
    assert_eq!(Param::equal(var!(x), num!(5)).operator_text(), Some(" == "));
    assert_eq!(Param::add(var!(x), num!(5)).operator_text(), Some(" + "));
    assert_eq!(Param::or(var!(x), var!(y)).operator_text(), Some(" || "));

    assert_eq!(num!(5).operator_text(), None);
    assert_eq!(num!(5).in_parentheses().operator_text(), None);
}

#[test]
fn test_pair_accessor() {
    let tree = Param::not_equal(var!(x), num!(5));
    let pair = tree.pair().unwrap();
    assert_eq!(*pair.left, var!(x));
    assert_eq!(*pair.right, num!(5));

    assert!(num!(5).pair().is_none());
    assert!(var!(x).in_parentheses().pair().is_none());
}
