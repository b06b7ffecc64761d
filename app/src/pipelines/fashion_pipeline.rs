// bluetick/src/pipelines/fashion_pipeline.rs

use std::sync::Arc;
use tickflow::{ContextData, Flows, Pipeline, PipelineControl, StepDef};
use tracing::{debug, info};

use crate::ai::{Capability, FashionVideoRequest, TryOnRequest};
use crate::errors::AppError;
use crate::pipelines::contexts::FashionJobCtxData;

pub fn register_fashion_job_pipeline(flows: &Arc<Flows<AppError>>) {
  let mut p = Pipeline::<FashionJobCtxData, AppError>::from_steps(vec![
    StepDef::required("render_look"),
    StepDef::required("render_video").skip_when(|ctx: ContextData<FashionJobCtxData>| !ctx.read().want_video),
  ])
  .named("fashion_job");

  p.on_root("render_look", |ctx_data: ContextData<FashionJobCtxData>| {
    Box::pin(async move {
      let (capability, request, job_id) = {
        let guard = ctx_data.read();
        (
          guard.capabilities.try_on.clone(),
          TryOnRequest {
            image: guard.source_image.clone(),
            model_type: guard.model_type.clone(),
            background: guard.background.clone(),
            tier: guard.tier,
          },
          guard.job_id.clone(),
        )
      };
      let image = capability.invoke(request).await?;
      debug!(%job_id, url = %image.url, "Look rendered.");
      ctx_data.write().generated_image = Some(image);
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  // The video is derived from the rendered look, not the upload.
  p.on_root("render_video", |ctx_data: ContextData<FashionJobCtxData>| {
    Box::pin(async move {
      let (capability, request, job_id) = {
        let guard = ctx_data.read();
        let image = guard
          .generated_image
          .as_ref()
          .ok_or_else(|| AppError::Internal("No rendered look to animate.".to_string()))?;
        (
          guard.capabilities.fashion_video.clone(),
          FashionVideoRequest {
            image: image.url.clone(),
            tier: guard.tier,
          },
          guard.job_id.clone(),
        )
      };
      let video = capability.invoke(request).await?;
      info!(%job_id, url = %video.url, "Fashion video rendered.");
      ctx_data.write().generated_video = Some(video);
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  flows.register_pipeline(p);
}
