// 重新导出shared crate的数据模型
pub use ideas_board_shared::Article;
#[cfg(feature = "mock")]
use ideas_board_shared::{Image, ListPage, RangeSummary, RequestDescriptor, SortKey};

// =============== Mock 数据 ===============

#[cfg(feature = "mock")]
const MOCK_TOTAL: u64 = 64;

/// One listing page cut from the mock ideas, honoring page, size and sort.
#[cfg(feature = "mock")]
pub fn get_mock_page(request: &RequestDescriptor) -> ListPage {
    let mut ideas = mock_ideas();
    if request.sort == SortKey::PublishedDesc {
        ideas.reverse();
    }

    let size = request.page_size.get() as usize;
    let last_page = ideas.len().div_ceil(size).max(1) as u32;
    let start = (request.page.max(1) as usize - 1) * size;
    let records: Vec<Article> = ideas.into_iter().skip(start).take(size).collect();

    let summary = if records.is_empty() {
        None
    } else {
        Some(RangeSummary {
            from: start as u64 + 1,
            to: (start + records.len()) as u64,
            total: Some(MOCK_TOTAL),
        })
    };

    ListPage {
        records,
        last_page,
        summary,
    }
}

// 内部函数：按发布时间升序构建全部 mock ideas
#[cfg(feature = "mock")]
fn mock_ideas() -> Vec<Article> {
    let topics = ["Branding", "Product", "Culture", "Engineering", "Design"];

    (1..=MOCK_TOTAL)
        .map(|i| {
            let topic = topics[(i as usize) % topics.len()];
            let stamp = format!("2022-{:02}-{:02} 09:00:00", (i - 1) / 28 + 1, (i - 1) % 28 + 1);
            let image = |size: &str| Image {
                id: i * 10 + if size == "small" { 1 } else { 2 },
                mime: "image/jpeg".to_string(),
                file_name: format!("idea-{}-{}.jpg", i, size),
                url: crate::config::asset_path(&format!("static/ideas/{}/idea-{}.jpg", size, i % 6 + 1)),
            };

            Article {
                id: i,
                title: format!("{} notes #{}: what we learned shipping it", topic, i),
                slug: format!("{}-notes-{}", topic.to_lowercase(), i),
                content: format!("<p>Field notes about {}.</p>", topic),
                created_at: stamp.clone(),
                updated_at: stamp.clone(),
                published_at: stamp,
                // 少量软删除记录，列表照常渲染
                deleted_at: (i % 9 == 0).then(|| "2022-06-01 00:00:00".to_string()),
                small_image: vec![image("small")],
                // 每 5 篇缺少 medium 图，走 small 兜底
                medium_image: if i % 5 == 0 { Vec::new() } else { vec![image("medium")] },
            }
        })
        .collect()
}
