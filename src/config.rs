//! Fixed asset references. Remote gifs render verbatim; if one goes dead it
//! shows the browser's broken-image placeholder and the card carries on.

pub fn greeting_gif_url() -> &'static str {
    "https://media2.giphy.com/media/v1.Y2lkPTc5MGI3NjExZGQ5ajFwY3d4aTd6andsNHF0bTAzdGI5d3F6cWd2MmZib3NxbjJmeCZlcD12MV9pbnRlcm5hbF9naWZfYnlfaWQmY3Q9Zw/1JmGiBtqTuehfYxuy9/giphy.gif"
}

pub fn letter_gif_url() -> &'static str {
    "https://media.giphy.com/media/MDJ9IbxxvDUQM/giphy.gif"
}

pub fn question_gif_url() -> &'static str {
    "https://media4.giphy.com/media/v1.Y2lkPTc5MGI3NjExN3QxOGZxaDBremY0ZWpkZjNqaTN0cDYzOXBmOHF4dHQ1MHpic3F2YiZlcD12MV9pbnRlcm5hbF9naWZfYnlfaWQmY3Q9Zw/Zl7u48zLVFgLpRwq6f/giphy.gif"
}

pub fn celebration_gif_url() -> &'static str {
    "https://media3.giphy.com/media/v1.Y2lkPTc5MGI3NjExeHVhc3kzcHF0ZnZ0a2kweXVja3pzNGlkaXdkN2d4MDBmeXRqZnVqYiZlcD12MV9pbnRlcm5hbF9naWZfYnlfaWQmY3Q9Zw/TjSPQgowhhJdHgvnwA/giphy.gif"
}

/// Our photo, served next to the bundle.
pub fn photo_path() -> &'static str {
    "/1.jpeg"
}
