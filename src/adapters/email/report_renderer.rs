//! HTML rendering for the guardian report email.

use crate::domain::assessment::ReportPayload;

/// Builds the email subject line.
pub fn report_subject(report: &ReportPayload) -> String {
    format!(
        "Depression Assessment Report - {}",
        report.contact.user_name
    )
}

/// Renders the full HTML body of the guardian report.
///
/// The layout mirrors the in-app report: greeting, score box, severity,
/// the screening-tool disclaimer, per-question responses, and the contact
/// block. All user-supplied values are HTML-escaped.
pub fn render_report_html(report: &ReportPayload) -> String {
    let answers_html: String = report
        .answers
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                r#"<div>
                <p class="question">{}. {}</p>
                <p class="answer">&rarr; {}</p>
              </div>"#,
                index + 1,
                escape_html(&item.question),
                escape_html(&item.answer),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <style>
      body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px; }}
      .header {{ background-color: #4a5568; color: white; padding: 20px; border-radius: 5px; text-align: center; }}
      .content {{ background-color: #f7fafc; padding: 20px; margin: 20px 0; border-radius: 5px; border-left: 4px solid #4299e1; }}
      .score-box {{ background-color: #fff; padding: 15px; margin: 15px 0; border-radius: 5px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
      .severity {{ font-size: 24px; font-weight: bold; color: #e53e3e; margin: 10px 0; }}
      .answers {{ background-color: #fff; padding: 15px; margin: 15px 0; border-radius: 5px; }}
      .question {{ font-weight: bold; color: #2d3748; margin-top: 10px; }}
      .answer {{ color: #4a5568; margin-left: 20px; margin-bottom: 15px; }}
      .footer {{ text-align: center; color: #718096; font-size: 12px; margin-top: 30px; padding-top: 20px; border-top: 1px solid #e2e8f0; }}
      .important-note {{ background-color: #fef5e7; border-left: 4px solid #f39c12; padding: 15px; margin: 20px 0; border-radius: 5px; }}
    </style>
  </head>
  <body>
    <div class="header">
      <h1>Depression Assessment Report</h1>
    </div>

    <div class="content">
      <h2>Hello {parent_name},</h2>
      <p>This is an automated report regarding the mental health assessment completed by <strong>{user_name}</strong>.</p>
    </div>

    <div class="score-box">
      <h3>Assessment Results</h3>
      <p><strong>Total Score:</strong> {score} / {max_score} ({percentage:.1}%)</p>
      <p class="severity"><strong>Severity Level:</strong> {severity}</p>
      <p><strong>Description:</strong> {description}</p>
    </div>

    <div class="important-note">
      <p><strong>&#9888; Important Note:</strong> This assessment is a screening tool and not a diagnostic instrument. If you have concerns about your child's mental health, please consult with a qualified mental health professional.</p>
    </div>

    <div class="answers">
      <h3>Detailed Responses</h3>
      {answers}
    </div>

    <div class="content">
      <h3>Contact Information</h3>
      <p><strong>User Name:</strong> {user_name}</p>
      <p><strong>User Email:</strong> {user_email}</p>
      <p><strong>Parent Phone:</strong> {parent_phone}</p>
    </div>

    <div class="footer">
      <p>This is an automated message. Please do not reply to this email.</p>
    </div>
  </body>
</html>"#,
        parent_name = escape_html(&report.contact.parent_name),
        user_name = escape_html(&report.contact.user_name),
        user_email = escape_html(&report.contact.user_email),
        parent_phone = escape_html(&report.contact.parent_phone),
        score = report.score,
        max_score = report.max_score,
        percentage = report.percentage,
        severity = escape_html(&report.severity),
        description = escape_html(&report.description),
        answers = answers_html,
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
