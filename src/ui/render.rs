//! HTML rendering of the library page.
//!
//! The page is split in two: a static shell (header with the search box and
//! buttons, styles, the IPC script) rendered once, and a dynamic region
//! (notice, category sections, modals) re-rendered after every state change.
//! Every piece of user text goes through [`html_escape`].

use std::collections::HashMap;

use crate::services::filter_engine::CategoryGroup;
use crate::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
use crate::types::category::Category;
use crate::types::entry::{Draft, Entry};
use crate::types::errors::AddRejection;

/// Element id of the re-rendered region.
pub const DYNAMIC_REGION_ID: &str = "library";

const STYLES: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{min-height:100vh;background:#111827;color:#f3e8ff;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Helvetica,Arial,sans-serif}
.gradient{color:transparent;background:linear-gradient(90deg,#c084fc,#f472b6);-webkit-background-clip:text;background-clip:text;font-weight:700}
.header{border-bottom:1px solid #a855f7;box-shadow:0 0 15px rgba(147,51,234,0.3);padding:24px}
.header-inner{display:flex;align-items:center;justify-content:space-between;max-width:1280px;margin:0 auto}
.header h1{font-size:24px}
.actions{display:flex;align-items:center;gap:16px}
.search{width:256px;padding:8px 8px 8px 12px;border-radius:4px;border:1px solid #a855f7;background:#1f2937;color:#f3e8ff}
.search::placeholder{color:#c084fc}
.btn{padding:8px;background:#581c87;color:#f3e8ff;border-radius:4px;border:1px solid #a855f7;cursor:pointer}
.btn:hover{background:#6b21a8}
.notice{position:fixed;top:16px;right:16px;background:#581c87;padding:16px;border-radius:8px;border:1px solid #a855f7}
.content{max-width:1280px;margin:0 auto;padding:24px}
.section{margin-bottom:48px}
.section h2{font-size:20px;margin-bottom:16px}
.section .count{font-size:12px;color:#c084fc;margin-left:8px;font-weight:400}
.shelf{display:grid;grid-template-columns:repeat(6,96px);gap:16px}
.tile{position:relative;height:160px;width:96px;border-radius:4px;cursor:pointer;transition:transform .15s}
.tile:hover{transform:translateY(-8px)}
.tile-title{position:absolute;inset:0;display:flex;align-items:center;justify-content:center;padding:8px;color:#fff;font-size:14px;font-weight:500;text-align:center;word-break:break-word}
.tile-remove{position:absolute;top:8px;right:8px;opacity:0;transition:opacity .15s;background:none;border:none;color:#fff;cursor:pointer;font-size:14px}
.tile:hover .tile-remove{opacity:1}
.overlay{position:fixed;inset:0;background:rgba(0,0,0,.5);display:flex;align-items:center;justify-content:center;padding:16px}
.modal{background:#111827;border-radius:8px;border:1px solid #a855f7;padding:24px;width:100%;max-width:448px}
.modal-head{display:flex;justify-content:space-between;align-items:center;margin-bottom:16px}
.modal-head h3{font-size:18px;font-weight:500}
.close{background:none;border:none;color:#c084fc;cursor:pointer;font-size:18px}
.form{display:flex;flex-direction:column;gap:16px}
.form input,.form textarea,.form select{padding:8px;border-radius:4px;border:1px solid #a855f7;background:#1f2937;color:#f3e8ff}
.form textarea{height:96px;resize:none}
.form .row{display:flex;gap:16px}
.form input[type=color]{width:64px;height:32px;padding:0}
.form select{flex:1}
.error{color:#f472b6;font-size:13px}
.details{background:#1f2937;border-radius:4px;padding:16px}
.details label{font-size:14px;font-weight:500;color:#d8b4fe}
.details p{margin-bottom:16px;word-break:break-all;white-space:pre-wrap}
"#;

const IPC_SCRIPT: &str = r#"
function send(cmd,args){var m=args||{};m.cmd=cmd;window.ipc.postMessage(JSON.stringify(m));}
document.getElementById('search').addEventListener('input',function(e){send('search',{term:e.target.value});});
document.getElementById('share').addEventListener('click',function(){send('share');});
document.getElementById('open-add').addEventListener('click',function(){send('open_add');});
document.addEventListener('click',function(e){
  var t=e.target.closest('[data-action]');if(!t)return;
  var a=t.dataset.action,id=t.dataset.id?Number(t.dataset.id):undefined;
  if(a==='remove'){e.stopPropagation();send('remove',{id:id});return;}
  if(a==='open_detail'){send('open_detail',{id:id});return;}
  send(a);
});
document.addEventListener('input',function(e){
  var f=e.target.dataset&&e.target.dataset.field;if(!f)return;
  send('draft',{field:f,value:e.target.value});
});
document.addEventListener('change',function(e){
  if(e.target.dataset&&e.target.dataset.field==='category')send('draft',{field:'category',value:e.target.value});
});
window.__neon_render=function(html){document.getElementById('library').innerHTML=html;};
window.__neon_copy=function(text){
  if(navigator.clipboard)navigator.clipboard.writeText(text).then(function(){send('copied');},function(err){send('copy_failed',{error:String(err)});});
  else send('copy_failed',{error:'navigator.clipboard missing',unavailable:true});
};
"#;

/// Everything the page renderer reads.
pub struct PageView<'a> {
    pub i18n: &'a LocalizationEngine,
    pub search_term: &'a str,
    pub groups: Vec<CategoryGroup<'a>>,
    pub notice_visible: bool,
    /// The draft, when the add modal is open.
    pub draft: Option<&'a Draft>,
    pub rejection: Option<AddRejection>,
    /// The selection, when the detail modal is open.
    pub detail: Option<&'a Entry>,
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// The complete HTML document, including the first render of the dynamic region.
pub fn render_document(view: &PageView) -> String {
    let t = |key: &str| html_escape(&view.i18n.t(key, None));
    let dynamic = render_dynamic(view);

    let mut html = String::with_capacity(STYLES.len() + IPC_SCRIPT.len() + dynamic.len() + 2048);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>");
    html.push_str(&t("app.title"));
    html.push_str("</title><style>");
    html.push_str(STYLES);
    html.push_str("</style></head><body>");
    html.push_str(&format!(
        "<div class=\"header\"><div class=\"header-inner\"><h1 class=\"gradient\">{title}</h1>\
         <div class=\"actions\">\
         <input id=\"search\" class=\"search\" type=\"text\" placeholder=\"{placeholder}\" value=\"{term}\">\
         <button id=\"share\" class=\"btn\">{share}</button>\
         <button id=\"open-add\" class=\"btn\">+ {add}</button>\
         </div></div></div>",
        title = t("app.title"),
        placeholder = t("header.search_placeholder"),
        term = html_escape(view.search_term),
        share = t("header.share"),
        add = t("header.add_site"),
    ));
    html.push_str(&format!("<div id=\"{}\">", DYNAMIC_REGION_ID));
    html.push_str(&dynamic);
    html.push_str("</div><script>");
    html.push_str(IPC_SCRIPT);
    html.push_str("</script></body></html>");
    html
}

/// Notice, category sections and open modals.
pub fn render_dynamic(view: &PageView) -> String {
    let mut html = String::new();

    if view.notice_visible {
        html.push_str(&format!(
            "<div class=\"notice\">{}</div>",
            html_escape(&view.i18n.t("notice.link_copied", None))
        ));
    }

    html.push_str("<div class=\"content\">");
    for group in &view.groups {
        html.push_str(&render_section(view.i18n, group));
    }
    html.push_str("</div>");

    if let Some(draft) = view.draft {
        html.push_str(&render_add_modal(view.i18n, draft, view.rejection));
    }
    if let Some(entry) = view.detail {
        html.push_str(&render_detail_modal(view.i18n, entry));
    }
    html
}

/// One category heading with its tiles. Empty categories still get a heading.
pub fn render_section(i18n: &LocalizationEngine, group: &CategoryGroup) -> String {
    let mut params = HashMap::new();
    params.insert("count".to_string(), group.entries.len().to_string());
    let count = i18n.plural("section.sites", group.entries.len() as u64, Some(&params));

    let tiles: String = group.entries.iter().map(|e| render_tile(e)).collect();
    format!(
        "<div class=\"section\" data-category=\"{name}\"><h2><span class=\"gradient\">{label}</span>\
         <span class=\"count\">{count}</span></h2><div class=\"shelf\">{tiles}</div></div>",
        name = group.category.as_str(),
        label = html_escape(&group.category.label()),
        count = html_escape(&count),
        tiles = tiles,
    )
}

/// A colored tile with a glow and a hover-revealed delete button.
pub fn render_tile(entry: &Entry) -> String {
    format!(
        "<div class=\"tile\" data-action=\"open_detail\" data-id=\"{id}\" \
         style=\"background-color:{color};box-shadow:0 0 10px {glow}\">\
         <span class=\"tile-title\">{title}</span>\
         <button class=\"tile-remove\" data-action=\"remove\" data-id=\"{id}\">&#x2715;</button></div>",
        id = entry.id,
        color = html_escape(&entry.color),
        glow = html_escape(&entry.glow_color()),
        title = html_escape(&entry.title),
    )
}

pub fn render_add_modal(i18n: &LocalizationEngine, draft: &Draft, rejection: Option<AddRejection>) -> String {
    let t = |key: &str| html_escape(&i18n.t(key, None));

    let options: String = Category::ALL
        .iter()
        .map(|c| {
            format!(
                "<option value=\"{value}\"{selected}>{label}</option>",
                value = c.as_str(),
                selected = if *c == draft.category { " selected" } else { "" },
                label = html_escape(&c.label()),
            )
        })
        .collect();

    let error = match rejection {
        Some(AddRejection::MissingTitle) => format!("<p class=\"error\">{}</p>", t("add.missing_title")),
        Some(AddRejection::MissingUrl) => format!("<p class=\"error\">{}</p>", t("add.missing_url")),
        None => String::new(),
    };

    format!(
        "<div class=\"overlay\"><div class=\"modal\" id=\"add-modal\">\
         <div class=\"modal-head\"><h3>{heading}</h3><button class=\"close\" data-action=\"close_add\">&#x2715;</button></div>\
         <div class=\"form\">\
         <input type=\"text\" data-field=\"title\" placeholder=\"{title_ph}\" value=\"{title}\">\
         <input type=\"text\" data-field=\"url\" placeholder=\"{url_ph}\" value=\"{url}\">\
         <textarea data-field=\"description\" placeholder=\"{desc_ph}\">{description}</textarea>\
         <div class=\"row\"><input type=\"color\" data-field=\"color\" value=\"{color}\">\
         <select data-field=\"category\">{options}</select></div>\
         {error}<button class=\"btn\" data-action=\"save\">{save}</button>\
         </div></div></div>",
        heading = t("add.heading"),
        title_ph = t("add.title_placeholder"),
        title = html_escape(&draft.title),
        url_ph = t("add.url_placeholder"),
        url = html_escape(&draft.url),
        desc_ph = t("add.description_placeholder"),
        description = html_escape(&draft.description),
        color = html_escape(&draft.color),
        options = options,
        error = error,
        save = t("add.save"),
    )
}

/// Read-only details of the selection, with the visit button.
pub fn render_detail_modal(i18n: &LocalizationEngine, entry: &Entry) -> String {
    let t = |key: &str| html_escape(&i18n.t(key, None));
    let description = if entry.description.is_empty() {
        t("detail.no_description")
    } else {
        html_escape(&entry.description)
    };

    format!(
        "<div class=\"overlay\"><div class=\"modal\" id=\"detail-modal\">\
         <div class=\"modal-head\"><h3>{title}</h3><button class=\"close\" data-action=\"close_detail\">&#x2715;</button></div>\
         <div class=\"form\"><button class=\"btn\" data-action=\"visit\">{visit}</button>\
         <div class=\"details\">\
         <label>{url_label}</label><p>{url}</p>\
         <label>{category_label}</label><p>{category}</p>\
         <label>{description_label}</label><p>{description}</p>\
         </div></div></div></div>",
        title = html_escape(&entry.title),
        visit = t("detail.visit"),
        url_label = t("detail.url"),
        url = html_escape(&entry.url),
        category_label = t("detail.category"),
        category = html_escape(&entry.category.label()),
        description_label = t("detail.description"),
        description = description,
    )
}
