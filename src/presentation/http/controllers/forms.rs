//! Urlencoded form endpoints. `GET` describes the form with its choices
//! loaded; `POST` cleans the submission and runs the matching command.
use crate::application::{
    commands::users::ResetPasswordCommand,
    dto::{ArticleDto, ArticleListItemDto, CursorPage, NewsletterDto, SubscriptionDto, UserDto},
    queries::articles::ListArticlesQuery,
};
use crate::presentation::forms::{
    ArticleApprovalForm, ArticleForm, ChoiceOption, ChoiceScope, ForgotPasswordForm, FormChoices,
    FormDescription, NewsletterForm, ResetPasswordForm, SearchForm, SubscriptionForm,
    UserRegistrationForm,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Form, Json, extract::Path};

/// Options and ids for every stored-choice scope a form needs.
async fn load_choices(
    state: &HttpState,
    scopes: &[ChoiceScope],
) -> HttpResult<(FormChoices, Vec<(ChoiceScope, Vec<ChoiceOption>)>)> {
    let mut choices = FormChoices::default();
    let mut options = Vec::new();

    for scope in scopes {
        let loaded: Vec<(i64, String)> = match scope {
            ChoiceScope::Publishers => state
                .services
                .catalog_queries
                .list_publishers()
                .await
                .into_http()?
                .into_iter()
                .map(|publisher| (publisher.id, publisher.name))
                .collect(),
            ChoiceScope::Categories => state
                .services
                .catalog_queries
                .list_categories()
                .await
                .into_http()?
                .into_iter()
                .map(|category| (category.id, category.name))
                .collect(),
            ChoiceScope::Journalists => state
                .services
                .user_queries
                .list_journalists()
                .await
                .into_http()?
                .into_iter()
                .map(|user| (user.id, user.username))
                .collect(),
            ChoiceScope::Roles | ChoiceScope::Statuses => continue,
        };

        let ids = loaded.iter().map(|(id, _)| *id).collect();
        match scope {
            ChoiceScope::Publishers => choices.publishers = ids,
            ChoiceScope::Categories => choices.categories = ids,
            _ => choices.journalists = ids,
        }
        options.push((
            *scope,
            loaded
                .into_iter()
                .map(|(id, label)| ChoiceOption::new(id, label))
                .collect(),
        ));
    }

    Ok((choices, options))
}

async fn describe(state: &HttpState, mut form: FormDescription) -> HttpResult<Json<FormDescription>> {
    let (_, options) = load_choices(state, &form.pending_scopes()).await?;
    for (scope, options) in options {
        form.fill(scope, &options);
    }
    Ok(Json(form))
}

async fn choices_for(state: &HttpState, form: FormDescription) -> HttpResult<FormChoices> {
    let (choices, _) = load_choices(state, &form.pending_scopes()).await?;
    Ok(choices)
}

pub async fn describe_registration() -> Json<FormDescription> {
    Json(UserRegistrationForm::describe())
}

pub async fn submit_registration(
    Extension(state): Extension<HttpState>,
    Form(form): Form<UserRegistrationForm>,
) -> HttpResult<Json<UserDto>> {
    let command = form.clean()?;
    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn describe_article(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<FormDescription>> {
    describe(&state, ArticleForm::describe()).await
}

pub async fn submit_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Json<ArticleDto>> {
    let choices = choices_for(&state, ArticleForm::describe()).await?;
    let cleaned = form.clean(&choices)?;
    state
        .services
        .article_commands
        .create_article(&user, cleaned.into_create_command())
        .await
        .into_http()
        .map(Json)
}

pub async fn describe_review() -> Json<FormDescription> {
    Json(ArticleApprovalForm::describe())
}

pub async fn submit_review(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Form(form): Form<ArticleApprovalForm>,
) -> HttpResult<Json<ArticleDto>> {
    let command = form.clean(id)?;
    state
        .services
        .article_commands
        .review_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn describe_newsletter(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<FormDescription>> {
    describe(&state, NewsletterForm::describe()).await
}

pub async fn submit_newsletter(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Form(form): Form<NewsletterForm>,
) -> HttpResult<Json<NewsletterDto>> {
    let choices = choices_for(&state, NewsletterForm::describe()).await?;
    let command = form.clean(&choices)?;
    state
        .services
        .newsletter_commands
        .create_newsletter(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn describe_subscription(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<FormDescription>> {
    describe(&state, SubscriptionForm::describe()).await
}

pub async fn submit_subscription(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Form(form): Form<SubscriptionForm>,
) -> HttpResult<Json<SubscriptionDto>> {
    let choices = choices_for(&state, SubscriptionForm::describe()).await?;
    let command = form.clean(&choices)?;
    state
        .services
        .subscription_commands
        .subscribe(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn describe_search(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<FormDescription>> {
    describe(&state, SearchForm::describe()).await
}

pub async fn submit_search(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Form(form): Form<SearchForm>,
) -> HttpResult<Json<CursorPage<ArticleListItemDto>>> {
    let choices = choices_for(&state, SearchForm::describe()).await?;
    let cleaned = form.clean(&choices)?;
    let query = ListArticlesQuery {
        q: cleaned.query,
        category_id: cleaned.category_id,
        publisher_id: cleaned.publisher_id,
        ..ListArticlesQuery::default()
    };

    state
        .services
        .article_queries
        .list_articles(actor.0.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}

pub async fn describe_forgot_password() -> Json<FormDescription> {
    Json(ForgotPasswordForm::describe())
}

pub async fn submit_forgot_password(
    Extension(state): Extension<HttpState>,
    Form(form): Form<ForgotPasswordForm>,
) -> HttpResult<Json<StatusResponse>> {
    let command = form.clean()?;
    state
        .services
        .user_commands
        .request_password_reset(command)
        .await
        .into_http()?;
    Ok(Json(StatusResponse::new("reset_requested")))
}

pub async fn describe_reset_password() -> Json<FormDescription> {
    Json(ResetPasswordForm::describe())
}

pub async fn submit_reset_password(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
    Form(form): Form<ResetPasswordForm>,
) -> HttpResult<Json<StatusResponse>> {
    let new_password = form.clean()?;
    state
        .services
        .user_commands
        .reset_password(ResetPasswordCommand {
            token,
            new_password,
        })
        .await
        .into_http()?;
    Ok(Json(StatusResponse::new("password_reset")))
}
