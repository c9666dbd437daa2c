use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::components::form_field::FormField;
use crate::config;
use crate::hire_us::controller::{SubmissionController, SubmissionOutcome};
use crate::hire_us::error_alert::ErrorAlert;
use crate::hire_us::fields::{ProjectType, FILES_FIELD};
use crate::hire_us::form_state::FileHandle;
use crate::hire_us::gratitude::Gratitude;
use crate::scroll::BrowserScroll;
use crate::Route;

pub enum HireUsMsg {
    Edit { name: String, value: String },
    FilesSelected(Vec<FileHandle>),
    Submit,
    DismissError,
    GoBack,
}

pub struct HireUs {
    controller: SubmissionController,
}

/// Name and current value of whichever form control fired the event.
fn read_control(target: Option<EventTarget>) -> Option<(String, String)> {
    let target = target?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        Some((input.name(), input.value()))
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        Some((area.name(), area.value()))
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        Some((select.name(), select.value()))
    } else {
        None
    }
}

fn read_files(target: Option<EventTarget>) -> Vec<FileHandle> {
    let Some(list) = target
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
    else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(FileHandle::from_file)
        .collect()
}

fn format_megabytes(bytes: u64) -> String {
    format!("{} MB", bytes / (1024 * 1024))
}

impl Component for HireUs {
    type Message = HireUsMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: SubmissionController::new(Rc::new(BrowserScroll)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HireUsMsg::Edit { name, value } => {
                if let Err(e) = self.controller.set_field(&name, value) {
                    warn!("Ignoring edit: {}", e);
                    return false;
                }
                true
            }
            HireUsMsg::FilesSelected(files) => {
                self.controller.set_files(files);
                true
            }
            HireUsMsg::Submit => {
                if let SubmissionOutcome::Rejected(missing) = self.controller.submit() {
                    info!("Missing fields: {:?}", missing);
                }
                true
            }
            HireUsMsg::DismissError => {
                self.controller.dismiss_error();
                true
            }
            HireUsMsg::GoBack => {
                self.controller.go_back();
                match ctx.link().navigator() {
                    Some(navigator) => navigator.push(&Route::Home),
                    None => warn!("No router available, staying on the form"),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let state = self.controller.snapshot();
        let ui = self.controller.ui_state();

        let on_input = link.batch_callback(|e: InputEvent| {
            read_control(e.target()).map(|(name, value)| HireUsMsg::Edit { name, value })
        });
        let on_select = link.batch_callback(|e: Event| {
            read_control(e.target()).map(|(name, value)| HireUsMsg::Edit { name, value })
        });
        let on_files = link.callback(|e: Event| HireUsMsg::FilesSelected(read_files(e.target())));
        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            HireUsMsg::Submit
        });
        let on_dismiss = link.callback(|_: ()| HireUsMsg::DismissError);
        let on_back = link.callback(|_: ()| HireUsMsg::GoBack);

        let oversized = state.oversized_files(config::MAX_UPLOAD_BYTES);
        let upload_limit = format_megabytes(config::MAX_UPLOAD_BYTES);

        html! {
            <div id="hire-container" class="hire-page">
                <div class="hire-content">
                    if ui.show_error_banner {
                        <ErrorAlert
                            missing_fields={ui.pending_missing.iter().map(|f| AttrValue::Static(f.name())).collect::<Vec<_>>()}
                            on_close={on_dismiss}
                        />
                    }

                    <div class="hire-visual">
                        <img src={config::HERO_IMAGE_URL} alt="Creative Work" />
                        <div class="hire-visual-overlay">
                            <h1>{"Tell us what you "}<br />{"need "}<span class="accent">{"done."}</span></h1>
                            <p>{"✨ The more you share, the better we create!"}</p>
                        </div>
                    </div>

                    <div class="hire-form-column">
                        <form class="hire-form" name="hireUsForm" id="hireUsForm" onsubmit={on_submit}>
                            <FormField label="Project Name" index={0}>
                                <input
                                    type="text"
                                    name="projectName"
                                    placeholder="e.g. New Website for My Startup"
                                    value={state.project_name.clone()}
                                    oninput={on_input.clone()}
                                />
                            </FormField>

                            <FormField label="Project Type" index={1}>
                                <select name="projectType" onchange={on_select}>
                                    { for ProjectType::ALL.iter().map(|option| html! {
                                        <option
                                            value={option.as_str()}
                                            selected={state.project_type == option.as_str()}
                                        >
                                            { option.as_str() }
                                        </option>
                                    }) }
                                </select>
                            </FormField>

                            <FormField label="Project Description" index={2}>
                                <textarea
                                    name="description"
                                    rows="4"
                                    placeholder="Describe your project in detail..."
                                    value={state.description.clone()}
                                    oninput={on_input.clone()}
                                />
                            </FormField>

                            <FormField label={format!("Attach Files (Max {})", upload_limit)} index={3}>
                                <div class="file-drop">
                                    <input
                                        type="file"
                                        id="fileUpload"
                                        name={FILES_FIELD}
                                        multiple={true}
                                        class="hidden"
                                        onchange={on_files}
                                    />
                                    <label for="fileUpload">
                                        {format!("Drag & drop any images or documents that might be helpful in explaining your brief here. (Max {}).", upload_limit)}
                                    </label>
                                </div>
                                if !state.files.is_empty() {
                                    <p class="file-count">{format!("{} file(s) selected", state.files.len())}</p>
                                }
                                if !oversized.is_empty() {
                                    <p class="file-warning">
                                        {format!(
                                            "Larger than {}: {}",
                                            upload_limit,
                                            oversized.iter().map(|f| f.name.as_str()).collect::<Vec<_>>().join(", ")
                                        )}
                                    </p>
                                }
                            </FormField>

                            <div class="form-row">
                                <FormField label="Estimated Budget (USD)" index={4}>
                                    <input
                                        type="number"
                                        name="budget"
                                        placeholder="e.g. 1000"
                                        value={state.budget.clone()}
                                        oninput={on_input.clone()}
                                    />
                                </FormField>
                                <FormField label="Deadline" index={5}>
                                    <input
                                        type="date"
                                        name="deadline"
                                        placeholder="2025-12-31"
                                        value={state.deadline.clone()}
                                        oninput={on_input.clone()}
                                    />
                                </FormField>
                            </div>

                            <FormField label="Additional Notes" index={6}>
                                <textarea
                                    name="additionalNotes"
                                    rows="4"
                                    placeholder="Share extra details or requirements..."
                                    value={state.additional_notes.clone()}
                                    oninput={on_input.clone()}
                                />
                            </FormField>

                            <div class="form-row">
                                <FormField label="Your Email" index={7}>
                                    <input
                                        type="email"
                                        name="email"
                                        placeholder="e.g. john@example.com"
                                        value={state.email.clone()}
                                        oninput={on_input.clone()}
                                    />
                                </FormField>
                                <FormField label="Phone Number" index={8}>
                                    <input
                                        type="tel"
                                        name="phone"
                                        placeholder="e.g. +1 234 567 890"
                                        value={state.phone.clone()}
                                        oninput={on_input}
                                    />
                                </FormField>
                            </div>

                            <button type="submit" class="hire-submit">{"Submit"}</button>
                        </form>
                    </div>
                </div>

                if ui.show_success {
                    <div class="gratitude-overlay">
                        <Gratitude on_back={on_back} />
                    </div>
                }

                <style>
                    {r#"
                    .hire-page {
                        position: relative;
                        width: 100%;
                        min-height: 100vh;
                        padding-top: 70px;
                        background: #000;
                        color: #fff;
                    }
                    .hire-content {
                        position: relative;
                        display: flex;
                        gap: 2.5rem;
                        min-height: 100vh;
                        margin: 0.625rem 0 0.5rem;
                        padding: 0.5rem 1.5rem 0;
                        border-top: 1px solid #374151;
                    }
                    @keyframes slideFromLeft {
                        from { transform: translateX(-50px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideFromRight {
                        from { transform: translateX(50px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes settleImage {
                        from { transform: scale(1.1); opacity: 0.8; }
                        to { transform: scale(1); opacity: 1; }
                    }
                    @keyframes fadeUp {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes fieldIn {
                        from { transform: translateY(10px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes bannerIn {
                        from { transform: translateY(-60px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes bannerOut {
                        from { transform: translateY(0); opacity: 1; }
                        to { transform: translateY(-60px); opacity: 0; }
                    }
                    @keyframes cardIn {
                        from { transform: translateY(50px) scale(0.9); opacity: 0; }
                        to { transform: translateY(0) scale(1); opacity: 1; }
                    }
                    .hire-visual {
                        position: relative;
                        flex: 1;
                        overflow: hidden;
                        animation: slideFromLeft 0.8s ease-out both;
                    }
                    .hire-visual img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        animation: settleImage 1s ease-out both;
                    }
                    .hire-visual-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        background: rgba(0, 0, 0, 0.5);
                        animation: fadeUp 1s ease-out 0.5s both;
                    }
                    .hire-visual-overlay h1 {
                        font-size: 3.75rem;
                        font-weight: 800;
                        line-height: 1.2;
                        margin-bottom: 1rem;
                    }
                    .hire-visual-overlay .accent {
                        color: #ef4444;
                    }
                    .hire-visual-overlay p {
                        color: #d1d5db;
                        font-size: 1.125rem;
                        text-align: center;
                        max-width: 28rem;
                    }
                    .hire-form-column {
                        flex: 1;
                        padding-left: 2rem;
                        border-left: 1px solid #374151;
                        animation: slideFromRight 0.8s ease-out 0.3s both;
                    }
                    .hire-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .form-field {
                        width: 100%;
                        animation: fieldIn 0.4s ease-out both;
                        transition: transform 0.2s;
                    }
                    .form-field:hover {
                        transform: scale(1.02);
                    }
                    .form-field-label {
                        display: block;
                        color: #9ca3af;
                        margin-bottom: 0.25rem;
                    }
                    .form-field-control {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        background: #1f2937;
                        border: 1px solid #374151;
                        border-radius: 6px;
                        transition: box-shadow 0.2s;
                    }
                    .form-field-control:focus-within {
                        box-shadow: 0 0 0 2px #3b82f6;
                    }
                    .form-field-control input,
                    .form-field-control textarea,
                    .form-field-control select {
                        width: 100%;
                        height: 100%;
                        background: transparent;
                        border: none;
                        outline: none;
                        color: #fff;
                        font-size: 1rem;
                    }
                    .form-field-control select {
                        background: #fff;
                        color: #000;
                    }
                    .file-drop {
                        border: 2px dashed #3b82f6;
                        padding: 1rem;
                        border-radius: 6px;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .file-drop:hover {
                        background: #1e3a8a;
                    }
                    .file-drop .hidden {
                        display: none;
                    }
                    .file-drop label {
                        font-size: 0.875rem;
                        color: #9ca3af;
                        cursor: pointer;
                    }
                    .file-count {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        margin-top: 0.5rem;
                    }
                    .file-warning {
                        color: #fbbf24;
                        font-size: 0.875rem;
                        margin-top: 0.25rem;
                    }
                    .hire-submit {
                        width: 100%;
                        padding: 0.75rem 1.5rem;
                        background: #2563eb;
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.15s, background 0.2s;
                    }
                    .hire-submit:hover {
                        background: #1d4ed8;
                        transform: scale(1.05);
                    }
                    .hire-submit:active {
                        transform: scale(0.95);
                    }
                    .error-alert {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        padding: 1rem;
                        background: rgba(185, 28, 28, 0.9);
                        color: #fff;
                        animation: bannerIn 0.5s both;
                    }
                    .error-alert.leaving {
                        animation: bannerOut 0.5s both;
                    }
                    .error-alert-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .error-alert-header h2 {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .error-alert-close {
                        color: #fff;
                        font-weight: 600;
                        padding: 0.25rem 0.75rem;
                        border: none;
                        border-radius: 4px;
                        background: #991b1b;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .error-alert-close:hover {
                        background: #e5e7eb;
                        color: #000;
                    }
                    .error-alert-list {
                        list-style: disc inside;
                        margin-top: 0.5rem;
                        font-size: 0.875rem;
                    }
                    .gratitude-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(24px);
                    }
                    .gratitude-card {
                        width: 90%;
                        max-width: 32rem;
                        margin-bottom: 15vh;
                        padding: 2rem;
                        text-align: center;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 16px;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
                        animation: cardIn 0.5s ease-in-out both;
                    }
                    .gratitude-card h2 {
                        font-size: 1.875rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .gratitude-lead {
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .gratitude-note {
                        margin-top: 1.5rem;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 8px;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .gratitude-signature {
                        display: block;
                        margin-top: 1rem;
                        text-align: right;
                    }
                    .gratitude-back {
                        margin-top: 1.5rem;
                        padding: 0.5rem 1.5rem;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(to right, #3b82f6, #a855f7);
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.2);
                        cursor: pointer;
                        transition: transform 0.2s;
                    }
                    .gratitude-back:hover {
                        transform: scale(1.05);
                    }
                    @media (max-width: 768px) {
                        .hire-content {
                            flex-direction: column;
                        }
                        .hire-form-column {
                            padding-left: 0;
                            border-left: none;
                        }
                        .form-row {
                            grid-template-columns: 1fr;
                        }
                        .hire-visual-overlay h1 {
                            font-size: 3rem;
                            text-align: center;
                        }
                    }
                    "#}
                </style>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(config::MAX_UPLOAD_BYTES), "25 MB");
    }
}
