use gloo_timers::callback::Timeout;
use web_sys::{
    Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::components::char_counter::{textarea_height, CharCounter};
use crate::config::RelayConfig;
use crate::contact::controller::{FormController, SubmitAction, SubmitState};
use crate::contact::relay::{deliver, EmailJsRelay, Resolution};
use crate::contact::status::HideTicket;
use crate::contact::validation::{ContactSubmission, Field};
use crate::dom;

const CATEGORIES: &[(&str, &str)] = &[
    ("advice", "General tech advice"),
    ("purchase", "Buying a device"),
    ("setup", "Setup & configuration"),
    ("troubleshooting", "Troubleshooting"),
    ("security", "Privacy & security"),
    ("other", "Something else"),
];

const BUDGETS: &[(&str, &str)] = &[
    ("under-500", "Under €500"),
    ("500-1000", "€500 - €1000"),
    ("1000-2000", "€1000 - €2000"),
    ("over-2000", "Over €2000"),
];

const TIMELINES: &[(&str, &str)] = &[
    ("asap", "As soon as possible"),
    ("week", "Within a week"),
    ("month", "Within a month"),
    ("flexible", "I'm flexible"),
];

pub enum Msg {
    Edit(Field, String),
    Focus(Option<Field>),
    Submit,
    Settled(Resolution),
    HideStatus(HideTicket),
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: RelayConfig,
}

pub struct ContactForm {
    controller: FormController,
    submission: ContactSubmission,
    focused: Option<Field>,
    status_ref: NodeRef,
    scroll_to_status: bool,
    pending_timer: Option<Timeout>,
    hide_timer: Option<Timeout>,
}

impl ContactForm {
    fn after_status_change(&mut self) {
        self.scroll_to_status = true;
    }

    fn schedule_hide(&mut self, ctx: &Context<Self>, ticket: HideTicket) {
        let link = ctx.link().clone();
        let timer = Timeout::new(ticket.after().as_millis() as u32, move || {
            link.send_message(Msg::HideStatus(ticket));
        });
        if let Some(previous) = self.hide_timer.replace(timer) {
            previous.cancel();
        }
    }

    fn group_class(&self, field: Field) -> Classes {
        classes!("form-group", (self.focused == Some(field)).then_some("focused"))
    }

    fn focus_handlers(
        ctx: &Context<Self>,
        field: Field,
    ) -> (Callback<FocusEvent>, Callback<FocusEvent>) {
        (
            ctx.link().callback(move |_: FocusEvent| Msg::Focus(Some(field))),
            ctx.link().callback(|_: FocusEvent| Msg::Focus(None)),
        )
    }

    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        kind: &'static str,
        label: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Edit(field, input.value())
        });
        let (onfocus, onblur) = Self::focus_handlers(ctx, field);

        html! {
            <div class={self.group_class(field)}>
                <label for={field.name()}>{label}</label>
                <input
                    type={kind}
                    id={field.name()}
                    name={field.name()}
                    placeholder={placeholder}
                    value={self.submission.get(field).to_string()}
                    {oninput}
                    {onfocus}
                    {onblur}
                />
            </div>
        }
    }

    fn select(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &'static str,
        prompt: &'static str,
        options: &[(&'static str, &'static str)],
    ) -> Html {
        let onchange = ctx.link().callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::Edit(field, select.value())
        });
        let (onfocus, onblur) = Self::focus_handlers(ctx, field);
        let current = self.submission.get(field);

        html! {
            <div class={self.group_class(field)}>
                <label for={field.name()}>{label}</label>
                <select id={field.name()} name={field.name()} {onchange} {onfocus} {onblur}>
                    <option value="" selected={current.is_empty()}>{prompt}</option>
                    { for options.iter().map(|(value, text)| html! {
                        <option value={*value} selected={current == *value}>{*text}</option>
                    }) }
                </select>
            </div>
        }
    }

    fn message_area(&self, ctx: &Context<Self>) -> Html {
        let field = Field::Message;
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let style = textarea.style();
            let _ = style.set_property("height", "auto");
            let height = textarea_height(textarea.scroll_height());
            let _ = style.set_property("height", &format!("{}px", height));
            Msg::Edit(field, textarea.value())
        });
        let (onfocus, onblur) = Self::focus_handlers(ctx, field);

        html! {
            <div class={self.group_class(field)}>
                <label for={field.name()}>{"Tell me about your situation *"}</label>
                <textarea
                    id={field.name()}
                    name={field.name()}
                    rows="5"
                    placeholder="What are you trying to achieve? What have you tried so far?"
                    value={self.submission.message.clone()}
                    {oninput}
                    {onfocus}
                    {onblur}
                />
                <CharCounter count={self.submission.message.chars().count()} />
            </div>
        }
    }

    fn status(&self) -> Html {
        let status = self.controller.status();
        let style = if status.is_visible() {
            "display: block;"
        } else {
            "display: none;"
        };
        let (class, lines) = match status.banner() {
            Some(banner) => (
                banner.class(),
                banner.message.lines().map(str::to_string).collect(),
            ),
            None => ("form-status".to_string(), Vec::new()),
        };

        html! {
            <div id="formStatus" ref={self.status_ref.clone()} {class} {style} role="status">
                { for lines.iter().enumerate().map(|(i, line)| html! {
                    <>
                        if i > 0 { <br /> }
                        {line.clone()}
                    </>
                }) }
            </div>
        }
    }
}

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: FormController::new(ctx.props().config.clone()),
            submission: ContactSubmission::default(),
            focused: None,
            status_ref: NodeRef::default(),
            scroll_to_status: false,
            pending_timer: None,
            hide_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                self.submission.set(field, value);
                true
            }
            Msg::Focus(field) => {
                self.focused = field;
                true
            }
            Msg::Submit => {
                match self.controller.submit(&self.submission) {
                    SubmitAction::Ignored => return false,
                    SubmitAction::Rejected => self.after_status_change(),
                    SubmitAction::Simulate(delay) => {
                        let link = ctx.link().clone();
                        let timer = Timeout::new(delay.as_millis() as u32, move || {
                            link.send_message(Msg::Settled(Resolution::Unconfigured));
                        });
                        self.pending_timer = Some(timer);
                    }
                    SubmitAction::Deliver(params) => {
                        let relay = EmailJsRelay::new(self.controller.config().clone());
                        ctx.link().send_future(async move {
                            Msg::Settled(deliver(&relay, &params).await)
                        });
                    }
                }
                true
            }
            Msg::Settled(resolution) => {
                drop(self.pending_timer.take());
                let settled = self.controller.resolve(resolution);
                settled.apply_to(&mut self.submission);
                if let Some(ticket) = settled.hide {
                    self.schedule_hide(ctx, ticket);
                }
                self.after_status_change();
                true
            }
            Msg::HideStatus(ticket) => self.controller.expire_status(ticket),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !std::mem::take(&mut self.scroll_to_status) {
            return;
        }
        if let Some(status) = self.status_ref.cast::<Element>() {
            dom::smooth_scroll(&status, ScrollLogicalPosition::Center);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let sending = self.controller.state() == SubmitState::Sending;

        html! {
            <form id="contactForm" class="contact-form" novalidate=true {onsubmit}>
                <div class="form-row">
                    { self.text_input(ctx, Field::Name, "text", "Your name *", "Jane Doe") }
                    {
                        self.text_input(
                            ctx,
                            Field::Email,
                            "email",
                            "Email address *",
                            "jane@example.com",
                        )
                    }
                </div>
                {
                    self.select(
                        ctx,
                        Field::Category,
                        "What do you need help with? *",
                        "Choose a topic",
                        CATEGORIES,
                    )
                }
                <div class="form-row">
                    { self.select(ctx, Field::Budget, "Budget", "Not sure yet", BUDGETS) }
                    { self.select(ctx, Field::Timeline, "Timeline", "No rush", TIMELINES) }
                </div>
                { self.message_area(ctx) }
                <button
                    type="submit"
                    class={classes!("btn", "btn-primary", sending.then_some("loading"))}
                    disabled={sending}
                >
                    {self.controller.button_label()}
                </button>
                { self.status() }
            </form>
        }
    }
}
