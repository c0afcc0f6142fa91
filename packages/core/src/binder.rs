use crate::helper::{make_helper_with_options, BemHelper};
use crate::memo::Memo;
use crate::namer::{to_kebab_case, AutoMix};
use crate::options::BemOptions;
use crate::vdom::VNode;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;
use tracing::{debug, instrument, warn};

/// A renderable UI component that receives a BEM helper
pub trait Component {
    type Props;

    /// Name used to derive the block identifier
    fn display_name(&self) -> Option<&str> {
        None
    }

    fn render(&self, props: &Self::Props, bem: &BemHelper) -> VNode;
}

/// Adapts a closure into a [`Component`]
pub struct FnComponent<F, P> {
    render: F,
    display_name: Option<String>,
    _props: PhantomData<fn(&P)>,
}

pub fn component_fn<P, F>(render: F) -> FnComponent<F, P>
where
    F: Fn(&P, &BemHelper) -> VNode,
{
    FnComponent {
        render,
        display_name: None,
        _props: PhantomData,
    }
}

impl<F, P> FnComponent<F, P> {
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

impl<F, P> Component for FnComponent<F, P>
where
    F: Fn(&P, &BemHelper) -> VNode,
{
    type Props = P;

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn render(&self, props: &P, bem: &BemHelper) -> VNode {
        (self.render)(props, bem)
    }
}

/// Props of a wrapped component plus the class a parent may pass down
#[derive(Debug, Clone, PartialEq)]
pub struct BemProps<P> {
    pub props: P,
    pub class_name: Option<String>,
}

impl<P> BemProps<P> {
    pub fn new(props: P) -> Self {
        Self {
            props,
            class_name: None,
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<AutoMix>) -> Self {
        self.class_name = Some(class_name.into().into_string());
        self
    }
}

impl Default for BemProps<()> {
    fn default() -> Self {
        Self::new(())
    }
}

/// Wrap a component, deriving its block from [`Component::display_name`].
///
/// An anonymous component still works, with an empty block identifier, but
/// logs a warning.
pub fn with_bem<C: Component>(component: C) -> WithBem<C> {
    let name = component.display_name().map(str::to_string);
    WithBem::new(name, component)
}

pub fn with_bem_named<C: Component>(name: impl Into<String>, component: C) -> WithBem<C> {
    WithBem::new(Some(name.into()), component)
}

/// A component whose renders receive a memoized [`BemHelper`]
pub struct WithBem<C> {
    name: Option<String>,
    block_id: String,
    options: BemOptions,
    component: C,
}

impl<C: Component> WithBem<C> {
    pub fn new(name: Option<String>, component: C) -> Self {
        if name.is_none() {
            warn!("with_bem called on an anonymous component, give it a display name");
        }
        let block_id = name.as_deref().map(to_kebab_case).unwrap_or_default();

        Self {
            name,
            block_id,
            options: BemOptions::default(),
            component,
        }
    }

    pub fn with_options(mut self, options: BemOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn block_id(&self) -> &str {
        &self.block_id
    }

    pub fn display_name(&self) -> String {
        format!("Bem({})", self.name.as_deref().unwrap_or("<anonymous>"))
    }

    /// Create an instance with its own helper cache
    pub fn mount(&self) -> BemInstance<'_, C> {
        BemInstance {
            wrapper: self,
            memo: RefCell::new(Memo::new()),
        }
    }
}

/// One mounted instance of a [`WithBem`] component
pub struct BemInstance<'a, C> {
    wrapper: &'a WithBem<C>,
    memo: RefCell<Memo<Option<String>, Rc<BemHelper>>>,
}

impl<'a, C: Component> BemInstance<'a, C> {
    #[instrument(skip(self, props), fields(block = %self.wrapper.block_id))]
    pub fn render(&self, props: &BemProps<C::Props>) -> VNode {
        let helper = self.helper(&props.class_name);
        self.wrapper.component.render(&props.props, &helper)
    }

    /// The helper for `class_name`, reused while the value is unchanged
    pub fn helper(&self, class_name: &Option<String>) -> Rc<BemHelper> {
        let mut memo = self.memo.borrow_mut();
        let helper = memo.get_or_compute(class_name, |auto_mix| {
            debug!(auto_mix = ?auto_mix, "Computing BEM helper");
            Rc::new(make_helper_with_options(
                &self.wrapper.block_id,
                auto_mix.as_deref(),
                self.wrapper.options.clone(),
            ))
        });
        Rc::clone(helper)
    }

    pub fn helper_computations(&self) -> usize {
        self.memo.borrow().computations()
    }
}
