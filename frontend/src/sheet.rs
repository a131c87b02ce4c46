use yew::prelude::*;

/// Full-screen modal container with a title bar and a close button.
///
/// The sheet is mounted only while its owner's modal state is open, so it
/// carries no visibility state of its own.
pub struct Sheet;

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    pub title: String,
    #[prop_or_default]
    pub children: Html,
    pub on_close: Callback<()>,
}

impl Component for Sheet {
    type Message = ();
    type Properties = SheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <div class="top-sheet show">
                <div class="sheet-panel">
                    <div class="sheet-header">
                        <h3>{ props.title.clone() }</h3>
                        <button type="button" class="sheet-close" onclick={on_close}>{ "✕" }</button>
                    </div>
                    <div class="sheet-body">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }
}
