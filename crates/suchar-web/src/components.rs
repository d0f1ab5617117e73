use suchar_api::{SucharDto, VoteKind};
use yew::{Callback, Children, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub nav_open: bool,
    pub theme_label: String,
    pub on_toggle_theme: Callback<()>,
    pub on_toggle_nav: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let on_toggle_theme = props.on_toggle_theme.clone();
    let on_toggle_nav = props.on_toggle_nav.clone();

    html! {
        <nav class={classes!("navbar", props.nav_open.then_some("nav-open"))}>
            <a class="navbar-brand" href="/suchary/">{ "Suchar Overflow" }</a>
            <button type="button" class="nav-toggle" onclick={move |_| on_toggle_nav.emit(())}>
                { "☰" }
            </button>
            <div class="nav-links">
                <a class="nav-link" href="/suchary/">{ "Suchary" }</a>
                <a class="nav-link" href="/suchary/add/">{ "Dodaj suchara" }</a>
                <button
                    type="button"
                    id="theme-toggle"
                    class="btn"
                    onclick={move |_| on_toggle_theme.emit(())}
                >
                    { &props.theme_label }
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct SucharCardProps {
    pub suchar: SucharDto,
    pub busy: bool,
    pub on_vote: Callback<(i64, VoteKind)>,
}

#[function_component(SucharCard)]
pub fn suchar_card(props: &SucharCardProps) -> Html {
    let suchar = &props.suchar;
    let published = suchar.published_at.clone().unwrap_or_default();

    html! {
        <article class="card suchar-card">
            <div class="card-body">
                <p class="card-text">{ &suchar.text }</p>
                <div class="suchar-tags">
                    <TagBadges tags={suchar.tags.clone()} />
                </div>
                <div class="suchar-meta text-muted">
                    {
                        if suchar.author.is_empty() {
                            html! {}
                        } else {
                            html! { <span class="suchar-author">{ &suchar.author }</span> }
                        }
                    }
                    {
                        if published.is_empty() {
                            html! {}
                        } else {
                            html! { <span class="suchar-published">{ published }</span> }
                        }
                    }
                </div>
                <VoteWidget
                    suchar_id={suchar.id}
                    funny_count={suchar.funny_count}
                    dry_count={suchar.dry_count}
                    user_is_funny={suchar.user_is_funny}
                    user_is_dry={suchar.user_is_dry}
                    busy={props.busy}
                    on_vote={props.on_vote.clone()}
                />
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct VoteWidgetProps {
    pub suchar_id: i64,
    pub funny_count: i64,
    pub dry_count: i64,
    pub user_is_funny: bool,
    pub user_is_dry: bool,
    pub busy: bool,
    pub on_vote: Callback<(i64, VoteKind)>,
}

#[function_component(VoteWidget)]
pub fn vote_widget(props: &VoteWidgetProps) -> Html {
    html! {
        <div class="d-flex align-items-center justify-content-between">
            { vote_button(props, VoteKind::Funny, props.user_is_funny, props.funny_count, "Śmieszny") }
            { vote_button(props, VoteKind::Dry, props.user_is_dry, props.dry_count, "Suchy") }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TagBadgesProps {
    pub tags: Vec<String>,
}

#[function_component(TagBadges)]
pub fn tag_badges(props: &TagBadgesProps) -> Html {
    html! {
        <>
            {
                for props.tags.iter().map(|tag| html! {
                    <span class="badge text-secondary border me-1 bg-light">{ format!("#{tag}") }</span>
                })
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuggestionListProps {
    pub suggestions: Vec<String>,
    pub on_pick: Callback<String>,
}

#[function_component(SuggestionList)]
pub fn suggestion_list(props: &SuggestionListProps) -> Html {
    html! {
        <div id="tags-suggestions" class="dropdown-menu">
            {
                for props.suggestions.iter().map(|name| {
                    let on_pick = props.on_pick.clone();
                    let chosen = name.clone();
                    html! {
                        <div class="dropdown-item" onclick={move |_| on_pick.emit(chosen.clone())}>
                            { name }
                        </div>
                    }
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    pub field_name: String,
    pub open: bool,
    pub options: Vec<(String, String)>,
    pub selected: String,
    pub on_toggle: Callback<()>,
    pub on_pick: Callback<String>,
}

#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let on_toggle = props.on_toggle.clone();
    let selected_label = props
        .options
        .iter()
        .find(|(key, _)| key == &props.selected)
        .map(|(_, label)| label.clone())
        .unwrap_or_default();

    html! {
        <div class={classes!("dropdown", props.open.then_some("show"))} data-dropdown="">
            <button
                type="button"
                class="btn dropdown-toggle"
                onclick={move |e: yew::MouseEvent| {
                    e.stop_propagation();
                    on_toggle.emit(());
                }}
            >
                { selected_label }
            </button>
            <input type="hidden" name={props.field_name.clone()} value={props.selected.clone()} />
            <div class={classes!("dropdown-menu", props.open.then_some("show"))}>
                {
                    for props.options.iter().map(|(key, label)| {
                        let on_pick = props.on_pick.clone();
                        let key_string = key.clone();
                        let is_active = key == &props.selected;
                        html! {
                            <button
                                type="button"
                                class={classes!("dropdown-item", is_active.then_some("active"))}
                                onclick={move |_| on_pick.emit(key_string.clone())}
                            >
                                { label }
                            </button>
                        }
                    })
                }
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastNote {
    pub id: u64,
    pub level: String,
    pub text: String,
    pub leaving: bool,
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<ToastNote>,
    pub on_close: Callback<u64>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            {
                for props.toasts.iter().map(|toast| {
                    let on_close = props.on_close.clone();
                    let id = toast.id;
                    html! {
                        <div class={classes!("toast", format!("toast-{}", toast.level), toast.leaving.then_some("toast-leave"))}>
                            <span class="toast-text">{ &toast.text }</span>
                            <button type="button" class="toast-close" onclick={move |_| on_close.emit(id)}>
                                { "×" }
                            </button>
                        </div>
                    }
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_overlay_click = props.on_close.clone();
    let on_close_click = props.on_close.clone();

    html! {
        <div class="modal-overlay" hidden={!props.open} onclick={move |_| on_overlay_click.emit(())}>
            <div class="modal-box" onclick={|e: yew::MouseEvent| e.stop_propagation()}>
                <div class="modal-header">
                    <span class="modal-title">{ &props.title }</span>
                    <button type="button" class="modal-close" onclick={move |_| on_close_click.emit(())}>
                        { "×" }
                    </button>
                </div>
                <div class="modal-body">
                    { props.children.clone() }
                </div>
            </div>
        </div>
    }
}

fn vote_button(
    props: &VoteWidgetProps,
    kind: VoteKind,
    is_active: bool,
    count: i64,
    label: &str,
) -> Html {
    let id = props.suchar_id;
    let on_vote = props.on_vote.clone();

    html! {
        <button
            type="button"
            class={classes!("btn", "btn-vote", is_active.then_some("active"))}
            disabled={props.busy}
            onclick={move |_| on_vote.emit((id, kind))}
        >
            <span class="vote-label">{ label }</span>
            <span class="vote-count">{ count }</span>
        </button>
    }
}
