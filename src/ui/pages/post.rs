//! Journal article reader at `/post/:id`

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::core::content::{Post, find_post};
use crate::ui::browser::scroll_to_top;
use crate::ui::common::{Button, ButtonVariant};
use crate::ui::header::use_section_jump;
use crate::ui::icon::{Icon, icons};
use crate::ui::markdown::Markdown;

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let post = Memo::new(move |_| params.with(|p| p.get("id")).as_deref().and_then(find_post));

    // Articles always open at the top; runs again when the id changes
    Effect::new(move |_| {
        post.track();
        scroll_to_top();
    });

    view! {
        <div class="page-transition">
            {move || match post.get() {
                Some(post) => view! { <Article post=post /> }.into_any(),
                None => view! { <PostNotFound /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PostNotFound() -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());

    view! {
        <Title text="Post not found | johnnightsteel" />
        <div class="centered-screen">
            <div class="text-center">
                <h1 class="text-title">"Post not found"</h1>
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| {
                        navigate.with_value(|navigate| navigate("/", Default::default()))
                    })
                >
                    <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                    "Back to Home"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn Article(post: &'static Post) -> impl IntoView {
    let jump = use_section_jump();

    view! {
        <Title text=format!("{} | johnnightsteel", post.title) />
        <Meta name="description" content=post.preview />
        <Meta name="author" content=post.author />

        <header class="article-bar">
            <div class="container-article">
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| jump("journal"))
                >
                    <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                    "Back to Journal"
                </Button>
            </div>
        </header>

        <article class="container-article article">
            <header class="article-header">
                <div class="article-meta">
                    <span class="meta-item">
                        <Icon name=icons::CLOCK class="w-4 h-4" />
                        {post.read_time}
                    </span>
                    <span class="meta-item">
                        <Icon name=icons::USER class="w-4 h-4" />
                        {post.author}
                    </span>
                    <span class="meta-dot" aria-hidden="true">"•"</span>
                    <span>{post.date}</span>
                </div>
                <h1 class="article-title">{post.title}</h1>
                <p class="lead">{post.preview}</p>
                <div class="tag-list">
                    {post
                        .tags
                        .iter()
                        .map(|tag| view! {
                            <span class="tag">
                                <Icon name=icons::TAG class="w-3 h-3" />
                                {*tag}
                            </span>
                        })
                        .collect_view()}
                </div>
            </header>

            <Markdown content=post.content title=post.title />

            <footer class="article-footer text-center">
                <p class="body-copy">"Enjoyed this article? Let's discuss your next project."</p>
                <Button on_click=Callback::new(move |_| jump("contact"))>"Get in Touch"</Button>
            </footer>
        </article>
    }
}
