//! Terminal front-end for [`EmployeeBoard`](crate::EmployeeBoard)
//!
//! | 按键 | 说明 |
//! |------|------|
//! | a / e / d | 新增 / 编辑 / 删除 |
//! | / | 搜索 (实时过滤) |
//! | ←/→ | 翻页 |
//! | r | 重新加载 |
//! | l | 显示日志 |
//! | q | 退出 |

pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;

pub use app::{App, FormField, Mode};

use crate::EmployeeGateway;

/// Draw / poll loop until the user quits
pub async fn run_app<B, G>(terminal: &mut Terminal<B>, app: &mut App<G>) -> io::Result<()>
where
    B: Backend,
    G: EmployeeGateway,
{
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = Duration::from_millis(100);
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key).await;
        }
    }
}
