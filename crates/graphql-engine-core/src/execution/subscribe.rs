use crate::execution::execute;
use crate::execution::execute::describe;
use crate::execution::execute::field_locs;
use crate::execution::execute::ExecutionContext;
use crate::execution::values::get_argument_values;
use crate::execution::ExecutionArgs;
use crate::execution::ExecutionResult;
use crate::execution::FieldValue;
use crate::execution::Path;
use crate::located_error;
use futures::stream::LocalBoxStream;
use futures::Stream;
use futures::StreamExt;
use graphql_engine_parser::GraphQLError;
use std::future::IntoFuture;
use std::pin::Pin;
use std::task::Context;
use std::task::Poll;

/// Resolves the subscription root field to its stream of source events.
///
/// Fails with a data-less [`ExecutionResult`] when the request is invalid
/// or when the field's `subscribe` resolver errors or does not return a
/// [`FieldValue::Stream`].
pub async fn create_source_event_stream(
    args: ExecutionArgs<'_>,
) -> Result<LocalBoxStream<'static, FieldValue>, ExecutionResult> {
    let context = ExecutionContext::build(args).map_err(ExecutionResult::from_errors)?;
    execute_subscription(&context)
        .await
        .map_err(|error| ExecutionResult::from_errors(vec![error]))
}

async fn execute_subscription(
    context: &ExecutionContext<'_>,
) -> Result<LocalBoxStream<'static, FieldValue>, GraphQLError> {
    let root_type = context.root_type()?;
    let root_fields = context.collect_root_fields(root_type);
    let Some((response_key, field_nodes)) = root_fields.into_iter().next() else {
        return Err(GraphQLError::new("Subscription operation selects no fields.")
            .with_node(context.operation.loc.as_ref()));
    };
    let path = Path::new(None, response_key, Some(root_type.name()));
    let field_name = field_nodes[0].name.as_str();
    let (Some(field_def), Some(parent_type)) = (
        context.schema.field_def(root_type, field_name),
        root_type.as_object(),
    ) else {
        return Err(GraphQLError::new(format!(
            "The subscription field '{field_name}' is not defined.",
        ))
        .with_nodes(field_locs(&field_nodes)));
    };
    let info = context.resolve_info(field_def, &field_nodes, parent_type, path.clone());

    let args = get_argument_values(
        &field_def.args,
        &field_nodes[0].arguments,
        context.schema,
        &context.variable_values,
        field_nodes[0].loc.as_ref(),
    )
    .map_err(|error| located_error(error, field_locs(&field_nodes), path.as_list()))?;

    let resolver = field_def
        .subscribe
        .as_ref()
        .unwrap_or(&context.subscribe_field_resolver);
    tracing::debug!(field_name, "subscribing to source stream");
    let event_stream = resolver(&context.root_value, &info, &args)
        .await
        .map_err(|error| error.located(field_locs(&field_nodes), path.as_list()))?;

    match event_stream.into_untyped() {
        FieldValue::Stream(stream) => stream.take().ok_or_else(|| {
            GraphQLError::new("Subscription stream was already consumed.")
                .with_nodes(field_locs(&field_nodes))
                .with_path(path.as_list())
        }),
        other => Err(GraphQLError::new(format!(
            "Subscription field must return a stream. Received: {}.",
            describe(&other),
        ))
        .with_nodes(field_locs(&field_nodes))
        .with_path(path.as_list())),
    }
}

/// Subscribes to the operation in `args`.
///
/// Each source event becomes the root value of a fresh execution of the
/// operation, and the stream yields the responses in event order. Setup
/// failures are returned as a data-less [`ExecutionResult`].
pub async fn subscribe<'a>(
    args: ExecutionArgs<'a>,
) -> Result<SubscriptionStream<'a>, ExecutionResult> {
    let source = create_source_event_stream(args.clone()).await?;
    let responses = source
        .then(move |payload| execute(args.clone().root_value(payload)).into_future())
        .boxed_local();
    Ok(SubscriptionStream {
        inner: Some(responses),
    })
}

/// The response stream of a subscription.
///
/// Closing it drops the source stream, which releases whatever the source
/// was holding. A closed stream yields no further responses.
pub struct SubscriptionStream<'a> {
    inner: Option<LocalBoxStream<'a, ExecutionResult>>,
}

impl SubscriptionStream<'_> {
    pub fn close(&mut self) {
        if self.inner.take().is_some() {
            tracing::debug!("subscription closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }
}

impl Stream for SubscriptionStream<'_> {
    type Item = ExecutionResult;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let Some(inner) = self.inner.as_mut() else {
            return Poll::Ready(None);
        };
        let next = inner.poll_next_unpin(cx);
        if let Poll::Ready(None) = next {
            self.inner = None;
        }
        next
    }
}
