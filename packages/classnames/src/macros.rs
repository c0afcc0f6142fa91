/// Build a [`ClassSpec::List`](crate::ClassSpec::List) from anything convertible into a spec.
///
/// ```
/// use withbem_classnames::{classes, conditional};
///
/// let spec = classes!["card", None::<&str>, conditional! { "active" => true }];
/// assert_eq!(spec.resolve(), "card active");
/// ```
#[macro_export]
macro_rules! classes {
    () => {
        $crate::ClassSpec::List(::std::vec::Vec::new())
    };
    ($($spec:expr),+ $(,)?) => {
        $crate::ClassSpec::List(::std::vec![$($crate::ClassSpec::from($spec)),+])
    };
}

/// Build a [`ClassSpec::Conditional`](crate::ClassSpec::Conditional), keeping entry order.
///
/// ```
/// use withbem_classnames::conditional;
///
/// let spec = conditional! { "selected" => true, "variant" => "primary", "hidden" => false };
/// assert_eq!(spec.resolve(), "selected variant-primary");
/// ```
#[macro_export]
macro_rules! conditional {
    () => {
        $crate::ClassSpec::Conditional(::std::vec::Vec::new())
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::ClassSpec::Conditional(::std::vec![
            $((::std::string::String::from($name), $crate::Condition::from($value))),+
        ])
    };
}
