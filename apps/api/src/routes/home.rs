use axum::response::Html;

/// GET /
/// Static upload form. Posts straight to the parse endpoint.
pub async fn home_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Resume Parser</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            background: #f4f6f9;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 10px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.1);
            width: 400px;
        }
        h2 {
            text-align: center;
            margin-bottom: 20px;
        }
        input, textarea {
            width: 100%;
            padding: 8px;
            margin-bottom: 15px;
            border-radius: 5px;
            border: 1px solid #ccc;
            font-size: 14px;
            box-sizing: border-box;
        }
        button {
            width: 100%;
            padding: 10px;
            background: #007bff;
            color: white;
            border: none;
            border-radius: 5px;
            cursor: pointer;
            font-size: 14px;
        }
        button:hover {
            background: #0056b3;
        }
        .note {
            text-align: center;
            font-size: 12px;
            color: gray;
            margin-top: 10px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h2>Resume Parser</h2>
        <form action="/parse-resume/" method="post" enctype="multipart/form-data">
            <label>Upload Resume (PDF)</label>
            <input type="file" name="file" accept=".pdf,application/pdf" required>

            <label>Job Description</label>
            <textarea name="job_description" rows="4" required></textarea>

            <button type="submit">Analyze Resume</button>
        </form>
        <div class="note">
            Results are returned as JSON. Use <a href="/docs">/docs</a> for Swagger API testing.
        </div>
    </div>
</body>
</html>
"#;
