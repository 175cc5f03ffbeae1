// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// [START transcoder_create_job_from_ad_hoc]
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::{
    AudioStream, ElementaryStream, Job, JobConfig, MuxStream, VideoStream, video_stream,
};

pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location_id: &str,
    input_uri: &str,
    output_uri: &str,
) -> anyhow::Result<Job> {
    let video = ElementaryStream::new()
        .set_key("video-stream0")
        .set_video_stream(
            VideoStream::new().set_h264(
                video_stream::H264CodecSettings::new()
                    .set_width_pixels(640)
                    .set_height_pixels(360)
                    .set_bitrate_bps(550_000)
                    .set_frame_rate(60.0),
            ),
        );
    let audio = ElementaryStream::new()
        .set_key("audio-stream0")
        .set_audio_stream(AudioStream::new().set_codec("aac").set_bitrate_bps(64_000));

    let job = client
        .create_job()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_job(
            Job::new()
                .set_input_uri(input_uri)
                .set_output_uri(output_uri)
                .set_config(
                    JobConfig::new()
                        .set_elementary_streams([video, audio])
                        .set_mux_streams([MuxStream::new()
                            .set_key("sd")
                            .set_container("mp4")
                            .set_elementary_streams(["video-stream0", "audio-stream0"])]),
                ),
        )
        .send()
        .await?;

    println!("created job {}", job.name);
    Ok(job)
}
// [END transcoder_create_job_from_ad_hoc]
