macro_rules! num {
    ($n:literal) => { crate::Param::Number(rust_decimal::Decimal::from($n as u32)) };
}

macro_rules! var {
    ($v:ident) => { crate::Param::Variable(stringify!($v).chars().next().unwrap()) };
}

macro_rules! text {
    ($s:literal) => { crate::Param::Text(alloc::string::String::from($s)) };
}

macro_rules! term_list {
    ($($x:expr),* $(,)?) => { crate::TermList { items: alloc::vec![ $($x),* ] } };
}

/// Displays a param into a fresh term list at position 0, returning the list and the next free
/// position.
macro_rules! display {
    ($n:expr) => { {
        let mut terms = crate::TermList::new();
        let next = crate::Displayable::display(&$n, &mut terms, 0);
        (terms, next)
    } };
}

macro_rules! text_render {
    ($n:expr) => { {
        let mut renderer = crate::renderers::TextRenderer::default();
        <crate::renderers::TextRenderer as crate::render::Renderer>::draw_all(&mut renderer, &$n);
        renderer.output
    } };
}

/// ```text
/// (a + 2) * b != 10 && x < 5
/// ```
pub fn complex_rule_expression() -> crate::Param {
    crate::Param::and(
        crate::Param::not_equal(
            crate::Param::multiply(
                crate::Param::add(var!(a), num!(2)).in_parentheses(),
                var!(b),
            ),
            num!(10),
        ),
        crate::Param::less(var!(x), num!(5)),
    )
}
