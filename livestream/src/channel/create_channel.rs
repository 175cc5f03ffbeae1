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

// [START livestream_create_channel]
use google_cloud_lro::Poller;
use google_cloud_video_livestream_v1::client::LivestreamService;
use google_cloud_video_livestream_v1::model::{
    AudioStream, Channel, ElementaryStream, InputAttachment, Manifest, MuxStream, VideoStream,
    channel, manifest::ManifestType, video_stream,
};

pub async fn sample(
    client: &LivestreamService,
    project_id: &str,
    location_id: &str,
    channel_id: &str,
    input_name: &str,
    output_uri: &str,
) -> anyhow::Result<Channel> {
    let video = ElementaryStream::new().set_key("es_video").set_video_stream(
        VideoStream::new().set_h264(
            video_stream::H264CodecSettings::new()
                .set_width_pixels(1280)
                .set_height_pixels(720)
                .set_bitrate_bps(3_000_000)
                .set_frame_rate(30.0),
        ),
    );
    let audio = ElementaryStream::new().set_key("es_audio").set_audio_stream(
        AudioStream::new()
            .set_codec("aac")
            .set_channel_count(2)
            .set_bitrate_bps(160_000)
            .set_sample_rate_hertz(48_000),
    );

    let channel = client
        .create_channel()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_channel_id(channel_id)
        .set_channel(
            Channel::new()
                .set_input_attachments([InputAttachment::new()
                    .set_key("primary-input")
                    .set_input(input_name)])
                .set_elementary_streams([video, audio])
                .set_mux_streams([MuxStream::new()
                    .set_key("mux_video")
                    .set_container("fmp4")
                    .set_elementary_streams(["es_video", "es_audio"])])
                .set_manifests([Manifest::new()
                    .set_file_name("main.m3u8")
                    .set_type(ManifestType::Hls)
                    .set_mux_streams(["mux_video"])
                    .set_max_segment_count(5)])
                .set_output(channel::Output::new().set_uri(output_uri)),
        )
        .poller()
        .until_done()
        .await?;

    println!("created channel {}", channel.name);
    Ok(channel)
}
// [END livestream_create_channel]
